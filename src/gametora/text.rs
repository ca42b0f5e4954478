//! Text cleanup for scraped tooltip and heading content.

use lazy_regex::regex;

/// Marker prefix on tooltip rows that describe a randomized outcome set.
pub const RANDOM_MARKER: &str = "Randomly either";

const DIVIDER: &str = "----------";

/// Assemble one tooltip row's text fragments into a single option string.
///
/// Rows whose first fragment contains [`RANDOM_MARKER`] are re-segmented
/// into divider-delimited groups: every literal `or` fragment closes the
/// current group. A trailing group with no closing `or` is still emitted,
/// and an `or` before any content yields an empty group. All other rows are
/// just the newline-join of their fragments. Both branches end with the
/// `Wisdom` -> `Wit` terminology rename.
pub fn format_event_option(fragments: &[String]) -> String {
    let is_random = fragments
        .first()
        .map(|f| f.contains(RANDOM_MARKER))
        .unwrap_or(false);

    let option_text = if is_random {
        let mut text = format!("{RANDOM_MARKER}\n{DIVIDER}\n");
        let mut current_group: Vec<&str> = Vec::new();
        for fragment in &fragments[1..] {
            if fragment == "or" {
                text.push_str(&current_group.join("\n"));
                text.push_str(&format!("\n{DIVIDER}\n"));
                current_group.clear();
            } else {
                current_group.push(fragment);
            }
        }
        if !current_group.is_empty() {
            text.push_str(&current_group.join("\n"));
        }
        text
    } else {
        fragments.join("\n")
    };

    option_text.replace("Wisdom", "Wit")
}

/// Normalize a detail-page heading into a stored entity key: drop the
/// literal `suffix` token, then any remaining parenthetical variant marker.
pub fn normalize_entity_name(raw: &str, suffix: &str) -> String {
    let name = raw.replace(suffix, "");
    regex!(r"\s*\(.*?\)")
        .replace_all(name.trim(), "")
        .trim()
        .to_string()
}

/// Split a support-card rarity token out of an already-normalized name.
///
/// Primary path matches an explicit `(SSR)`, `(SR)` or `(R)` tag and strips
/// it from the name. The fallback takes the last whitespace-delimited token
/// with parentheses characters removed; it is heuristic and can misread
/// malformed titles, which matches the upstream site's observed behavior.
pub fn split_rarity(name: &str) -> (String, String) {
    if let Some(caps) = regex!(r"\((SSR|SR|R)\)").captures(name) {
        let rarity = caps[1].to_string();
        let name = name.replace(&format!(" ({rarity})"), "").trim().to_string();
        (name, rarity)
    } else {
        let rarity = name
            .split(' ')
            .last()
            .unwrap_or("")
            .replace(')', "")
            .replace('(', "")
            .trim()
            .to_string();
        (name.to_string(), rarity)
    }
}

/// Parse a trailing `(<digits>)` skill id out of a description. Returns the
/// id (unset when no such suffix exists) and the description with the
/// suffix and any whitespace before it removed.
pub fn parse_skill_description(description: &str) -> (Option<u32>, String) {
    match regex!(r"\((\d+)\)$").captures(description) {
        Some(caps) => {
            let id = caps[1].parse().ok();
            let clean = regex!(r"\s*\(\d+\)$")
                .replace(description, "")
                .into_owned();
            (id, clean)
        }
        None => (None, description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fragments(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_random_outcomes_are_grouped_by_dividers() {
        let input = fragments(&[
            "Randomly either",
            "Speed +10",
            "or",
            "Stamina +10",
            "or",
            "Power +10",
        ]);
        assert_eq!(
            format_event_option(&input),
            "Randomly either\n----------\nSpeed +10\n----------\nStamina +10\n----------\nPower +10"
        );
    }

    #[test]
    fn test_random_group_count_matches_or_count() {
        let input = fragments(&["Randomly either", "Energy +10", "or", "Mood +1"]);
        let output = format_event_option(&input);
        // 1 "or" fragment -> 2 groups after the header.
        let groups: Vec<&str> = output.split("----------\n").skip(1).collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups, ["Energy +10\n", "Mood +1"]);
    }

    #[test]
    fn test_multi_fragment_groups_join_with_newlines() {
        let input = fragments(&[
            "Randomly either",
            "Speed +5",
            "Power +5",
            "or",
            "Energy -10",
        ]);
        assert_eq!(
            format_event_option(&input),
            "Randomly either\n----------\nSpeed +5\nPower +5\n----------\nEnergy -10"
        );
    }

    #[test]
    fn test_leading_or_produces_empty_group() {
        let input = fragments(&["Randomly either", "or", "Guts +10"]);
        assert_eq!(
            format_event_option(&input),
            "Randomly either\n----------\n\n----------\nGuts +10"
        );
    }

    #[test]
    fn test_trailing_or_leaves_no_dangling_group() {
        let input = fragments(&["Randomly either", "Speed +10", "or"]);
        assert_eq!(
            format_event_option(&input),
            "Randomly either\n----------\nSpeed +10\n----------\n"
        );
    }

    #[test]
    fn test_plain_rows_are_newline_joined() {
        let input = fragments(&["Energy +10", "Speed +5"]);
        assert_eq!(format_event_option(&input), "Energy +10\nSpeed +5");
    }

    #[test]
    fn test_empty_fragments_yield_empty_option() {
        assert_eq!(format_event_option(&[]), "");
    }

    #[test]
    fn test_wisdom_is_renamed_to_wit() {
        let input = fragments(&["Wisdom +10", "Wisdom of the ages"]);
        assert_eq!(format_event_option(&input), "Wit +10\nWit of the ages");
    }

    #[test]
    fn test_wisdom_rename_applies_inside_random_groups() {
        let input = fragments(&["Randomly either", "Wisdom +10", "or", "Speed +10"]);
        assert_eq!(
            format_event_option(&input),
            "Randomly either\n----------\nWit +10\n----------\nSpeed +10"
        );
    }

    #[test]
    fn test_existing_wit_is_untouched() {
        let input = fragments(&["Wit +10"]);
        assert_eq!(format_event_option(&input), "Wit +10");
    }

    #[test]
    fn test_original_suffix_is_stripped() {
        assert_eq!(
            normalize_entity_name("Special Week (Original)", "(Original)"),
            "Special Week"
        );
    }

    #[test]
    fn test_variant_parentheticals_are_stripped() {
        assert_eq!(
            normalize_entity_name("Special Week (Wedding)", "(Original)"),
            "Special Week"
        );
        assert_eq!(
            normalize_entity_name("Maruzensky (Swimsuit)", "(Original)"),
            "Maruzensky"
        );
    }

    #[test]
    fn test_variants_collapse_to_the_same_key() {
        let a = normalize_entity_name("Gold Ship (Original)", "(Original)");
        let b = normalize_entity_name("Gold Ship (Stage)", "(Original)");
        assert_eq!(a, b);
    }

    #[test]
    fn test_support_card_suffix_is_stripped() {
        assert_eq!(
            normalize_entity_name("Kitasan Black Support Card", "Support Card"),
            "Kitasan Black"
        );
    }

    #[test]
    fn test_rarity_from_explicit_tag() {
        let (name, rarity) = split_rarity("Kitasan Black (SSR)");
        assert_eq!(name, "Kitasan Black");
        assert_eq!(rarity, "SSR");
    }

    #[test]
    fn test_rarity_fallback_uses_last_token() {
        let (name, rarity) = split_rarity("Kitasan Black SSR");
        assert_eq!(name, "Kitasan Black SSR");
        assert_eq!(rarity, "SSR");
    }

    #[test]
    fn test_rarity_fallback_strips_parentheses_characters() {
        let (_, rarity) = split_rarity("Vodka (SR");
        assert_eq!(rarity, "SR");
    }

    #[test]
    fn test_skill_id_is_parsed_and_stripped() {
        let (id, clean) = parse_skill_description("Slightly increase velocity (12345)");
        assert_eq!(id, Some(12345));
        assert_eq!(clean, "Slightly increase velocity");
    }

    #[test]
    fn test_description_without_id_is_unchanged() {
        let (id, clean) = parse_skill_description("Slightly increase velocity");
        assert_eq!(id, None);
        assert_eq!(clean, "Slightly increase velocity");
    }

    #[test]
    fn test_inner_parenthetical_is_not_an_id() {
        let (id, clean) = parse_skill_description("Recover (a little) endurance");
        assert_eq!(id, None);
        assert_eq!(clean, "Recover (a little) endurance");
    }
}
