/// Get the platform from the comment of the first (`Mozilla`) section.
///
/// The IE compatibility marker (`compatible`) yields no platform,
/// leaving it up to the engine heuristic to decide.
#[must_use]
pub fn extract_platform(comment: &[String]) -> &str {
    let Some(first) = comment.first() else {
        return "";
    };

    if first == "compatible" {
        ""
    } else if first.starts_with("Windows") {
        "Windows"
    } else if first.starts_with("Symbian") {
        "Symbian"
    } else if first.starts_with("webOS") {
        "webOS"
    } else if first == "BB10" {
        "BlackBerry"
    } else {
        first.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_extract_platform() {
        for (tokens, expected) in [
            (&[][..], ""),
            (&["compatible", "MSIE 7.0", "Windows NT 6.0"][..], ""),
            (&["Windows NT 6.1", "WOW64"][..], "Windows"),
            (&["Windows Phone 8.0"][..], "Windows"),
            (&["SymbianOS/9.1", "U"][..], "Symbian"),
            (&["webOS/1.4.0", "U", "en-US"][..], "webOS"),
            (&["BB10", "Touch"][..], "BlackBerry"),
            (&["BlackBerry", "U"][..], "BlackBerry"),
            (&["X11", "Linux x86_64"][..], "X11"),
            (&["Macintosh", "Intel Mac OS X 10_15_7"][..], "Macintosh"),
            (&["iPhone", "CPU iPhone OS 9_3 like Mac OS X"][..], "iPhone"),
            (&["Linux", "Android 4.4"][..], "Linux"),
        ] {
            assert_eq!(
                extract_platform(&comment(tokens)),
                expected,
                "comment: {tokens:?}"
            );
        }
    }

    #[test]
    fn test_extract_platform_is_case_sensitive() {
        assert_eq!(extract_platform(&comment(&["bb10"])), "bb10");
        assert_eq!(extract_platform(&comment(&["Compatible"])), "Compatible");
    }
}
