use url::Url;

const ORIGIN: &str = "http://board.invalid/";

/// Build `/discussions/{email}/{tail..}` with each segment percent-encoded.
pub fn author_path(email: &str, tail: &[&str]) -> String {
    let mut path = String::from("/discussions/");
    path.push_str(&encode_segment(email));
    for segment in tail {
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    path
}

fn encode_segment(segment: &str) -> String {
    // `.` and `..` would be resolved as navigation by the URL parser.
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => {
            let mut url = Url::parse(ORIGIN).expect("constant origin is a valid URL");
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(segment);
            }
            url.path().trim_start_matches('/').to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_emails_readable() {
        assert_eq!(author_path("bob@x.com", &[]), "/discussions/bob@x.com");
        assert_eq!(author_path("bob@x.com", &["post"]), "/discussions/bob@x.com/post");
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(author_path("a/b c", &[]), "/discussions/a%2Fb%20c");
        assert_eq!(author_path("..", &["post"]), "/discussions/%2E%2E/post");
        assert_eq!(author_path(".", &[]), "/discussions/%2E");
        assert_eq!(author_path("...", &[]), "/discussions/...");
    }
}
