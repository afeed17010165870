//! Pipe-delimited source lines.

use crate::model::{Source, SourceType};

/// Parse `type|channelName|sourceDate|timestamp|note` lines.
///
/// Lines may end in `\n`, `\r\n`, `\r` or U+2028. Blank lines and lines
/// without a channel name are skipped. Missing trailing parts are empty and
/// a missing or unknown type is `etc`.
pub fn parse_sources(text: &str) -> Vec<Source> {
    text.split(['\n', '\r', '\u{2028}'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<Source> {
    let mut parts = line.split('|').map(str::trim);
    let mut next = || parts.next().unwrap_or_default().to_string();
    let kind = SourceType::parse(&next()).unwrap_or(SourceType::Etc);
    let channel_name = next();
    if channel_name.is_empty() {
        return None;
    }
    Some(Source {
        kind,
        channel_name,
        source_date: next(),
        timestamp: next(),
        note: next(),
    })
}

/// Format sources back into the lines [`parse_sources`] reads.
pub fn format_sources(sources: &[Source]) -> String {
    sources
        .iter()
        .map(|source| {
            [
                source.kind.as_str(),
                source.channel_name.as_str(),
                source.source_date.as_str(),
                source.timestamp.as_str(),
                source.note.as_str(),
            ]
            .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let sources = parse_sources("youtube | 뉴스채널 | 2025-01-02 | 03:15 | 인터뷰");
        assert_eq!(
            sources,
            vec![Source {
                kind: SourceType::Youtube,
                channel_name: "뉴스채널".into(),
                source_date: "2025-01-02".into(),
                timestamp: "03:15".into(),
                note: "인터뷰".into(),
            }]
        );
    }

    #[test]
    fn test_parse_line_endings_and_skips() {
        let text = "official|정부 보도자료\r\n\r\n|이름 없는 타입\rmedia|\u{2028}blog|개인 블로그|2025";
        let sources = parse_sources(text);
        let names: Vec<_> = sources.iter().map(|s| s.channel_name.as_str()).collect();
        assert_eq!(names, vec!["정부 보도자료", "이름 없는 타입", "개인 블로그"]);
        assert_eq!(sources[1].kind, SourceType::Etc);
        assert_eq!(sources[2].kind, SourceType::Etc);
        assert_eq!(sources[2].source_date, "2025");
        assert_eq!(sources[2].note, "");
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_sources("").is_empty());
        assert!(parse_sources("\n \n").is_empty());
    }

    #[test]
    fn test_format_then_parse() {
        let text = "media|KBS|2025-01-02||단독 보도";
        let sources = parse_sources(text);
        assert_eq!(format_sources(&sources), text);
    }
}
