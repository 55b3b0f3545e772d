//! Prompt composition for headline explanations.
//!
//! Three template sections concatenated in fixed order: an understanding
//! section carrying the record fields, a static planner section, and an
//! output-format section repeating the title. Pure functions, no validation;
//! callers pass records whose fields are already known to be non-empty.

use hx_core::HeadlineRecord;

pub fn compose(record: &HeadlineRecord) -> String {
    let mut prompt = understanding_section(&record.title, &record.description, &record.link);
    prompt.push_str(planner_section());
    prompt.push_str(&output_format_section(&record.title));
    prompt
}

fn understanding_section(title: &str, description: &str, link: &str) -> String {
    format!(
        r#"
You are an AI agent that analyzes a news article.

Headline:
"{title}"

Short Description:
"{description}"

Article Link:
{link}

Identify:
1. Topic (economy, politics, sports, etc.)
2. Key entity involved
3. Country (if applicable)
"#
    )
}

fn planner_section() -> &'static str {
    r#"
Before answering, follow these steps internally:
1. Understand what happened in the news
2. Use the description and link as context
3. Recall prior background related to this issue
4. Keep the tone neutral and factual
"#
}

fn output_format_section(title: &str) -> String {
    format!(
        r#"
Generate the final answer strictly in the format below.

Headline:
{title}

Topic:
(one word or short phrase)

Key Entity:
(name)

Summary:
(3-4 lines in very simple language)

Background / History:
(2-3 lines explaining the past context or ongoing situation related to this news)
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> HeadlineRecord {
        HeadlineRecord {
            title: "UK inflation falls to 2%".to_string(),
            description: "Prices rose more slowly in May.".to_string(),
            link: "http://news.example/inflation".to_string(),
        }
    }

    #[test]
    fn test_compose_embeds_all_fields() {
        let prompt = compose(&record());
        assert!(prompt.contains("UK inflation falls to 2%"));
        assert!(prompt.contains("Prices rose more slowly in May."));
        assert!(prompt.contains("http://news.example/inflation"));
    }

    #[test]
    fn test_compose_is_deterministic() {
        assert_eq!(compose(&record()), compose(&record()));
    }

    #[test]
    fn test_sections_appear_in_order() {
        let prompt = compose(&record());
        let understanding = prompt.find("Identify:").unwrap();
        let planner = prompt.find("Before answering").unwrap();
        let output = prompt.find("Generate the final answer").unwrap();
        assert!(understanding < planner);
        assert!(planner < output);
    }

    #[test]
    fn test_title_appears_twice() {
        let prompt = compose(&record());
        assert_eq!(prompt.matches("UK inflation falls to 2%").count(), 2);
    }

    #[test]
    fn test_planner_section_has_no_record_data() {
        assert!(!planner_section().contains("inflation"));
        assert!(planner_section().contains("neutral and factual"));
    }
}
