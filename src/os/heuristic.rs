use super::{Browser, OsInfo, ios_version, normalize_os};

/// An OS inference strategy, one per rendering engine or client family.
///
/// A heuristic reads the comment tokens of the section that identified
/// the engine and writes what it can infer into the given [`OsInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic<'a> {
    /// WebKit-powered browsers.
    ///
    /// For automated crawlers a two-token comment is
    /// not interpreted as an operating system.
    WebKit { crawler: bool },
    /// Gecko-powered browsers.
    Gecko,
    /// Internet Explorer.
    Trident,
    /// Opera in its legacy (Presto) format.
    Opera,
    /// Android clients advertising the Dalvik VM.
    Dalvik,
    /// iOS clients advertising CFNetwork and Darwin.
    Ios { cfnetwork: &'a str, darwin: &'a str },
}

impl Heuristic<'_> {
    /// Apply this heuristic to the given comment.
    pub fn apply(self, info: &mut OsInfo, browser: &mut Browser, comment: &[String]) {
        match self {
            Self::WebKit { crawler } => webkit(info, browser, comment, crawler),
            Self::Gecko => gecko(info, comment),
            Self::Trident => trident(info, comment),
            Self::Opera => opera(info, comment),
            Self::Dalvik => dalvik(info, comment),
            Self::Ios { cfnetwork, darwin } => ios(info, cfnetwork, darwin),
        }
    }
}

fn webkit(info: &mut OsInfo, browser: &mut Browser, comment: &[String], crawler: bool) {
    match info.platform.as_str() {
        "webOS" => {
            browser.name.clone_from(&info.platform);
            info.os = "Palm".to_owned();
            if let Some(localization) = comment.get(2) {
                info.localization.clone_from(localization);
            }
            info.mobile = true;
        }
        "Symbian" => {
            info.mobile = true;
            browser.name.clone_from(&info.platform);
            if let Some(first) = comment.first() {
                info.os.clone_from(first);
            }
        }
        "Linux" => {
            info.mobile = true;
            // stock Android browsers identify as Safari
            if browser.name == "Safari" {
                browser.name = "Android".to_owned();
            }
            match comment {
                [first, second, rest @ ..] if second == "U" => match rest.first() {
                    Some(third) => info.os.clone_from(third),
                    None => {
                        // desktop linux
                        info.mobile = false;
                        info.os.clone_from(first);
                    }
                },
                [_, second, ..] => info.os.clone_from(second),
                _ => (),
            }
            if let Some(localization) = comment.get(3) {
                info.localization.clone_from(localization);
            }
        }
        _ if !comment.is_empty() => {
            if let Some(localization) = comment.get(3) {
                info.localization.clone_from(localization);
            }
            match comment {
                [first, ..] if first.starts_with("Windows NT") => {
                    info.os = normalize_os(first).to_owned();
                }
                // a lone token is a locale rather than an os
                [only] => info.localization.clone_from(only),
                [_, second] => {
                    if !crawler {
                        info.os = normalize_os(second).to_owned();
                    }
                }
                [_, _, third, ..] => info.os = normalize_os(third).to_owned(),
                [] => (),
            }
            if info.platform == "BlackBerry" {
                browser.name.clone_from(&info.platform);
                if info.os == "Touch" {
                    info.os.clone_from(&info.platform);
                }
            }
        }
        _ => (),
    }
}

fn gecko(info: &mut OsInfo, comment: &[String]) {
    let [first, second, rest @ ..] = comment else {
        return;
    };

    if second == "U" {
        info.os = normalize_os(rest.first().unwrap_or(second)).to_owned();
    } else if info.platform == "Android" {
        // Firefox for Android swaps platform and os
        info.mobile = true;
        let platform = std::mem::replace(&mut info.platform, normalize_os(second).to_owned());
        info.os = platform;
    } else if first == "Mobile" || first == "Tablet" {
        info.mobile = true;
        info.os = "FirefoxOS".to_owned();
    } else if info.os.is_empty() {
        info.os = normalize_os(second).to_owned();
    }

    if let Some(localization) = comment.get(3) {
        info.localization.clone_from(localization);
    }
}

fn trident(info: &mut OsInfo, comment: &[String]) {
    // Internet Explorer only runs on Windows.
    info.platform = "Windows".to_owned();

    // IE11 has the os set already by the dispatcher.
    if info.os.is_empty() {
        info.os = match comment.get(2) {
            Some(third) => normalize_os(third).to_owned(),
            None => "Windows NT 4.0".to_owned(),
        };
    }

    if comment.iter().any(|token| token.starts_with("IEMobile")) {
        info.mobile = true;
    }
}

fn opera(info: &mut OsInfo, comment: &[String]) {
    let Some(first) = comment.first() else {
        return;
    };

    if first.starts_with("Windows") {
        info.platform = "Windows".to_owned();
        info.os = normalize_os(first).to_owned();
        match comment {
            // Mail.Ru agent
            [_, _, third, fourth, ..] if third.starts_with("MRA") => {
                info.localization.clone_from(fourth);
            }
            [_, _, third, ..] => info.localization.clone_from(third),
            _ => (),
        }
    } else {
        if first.starts_with("Android") {
            info.mobile = true;
        }
        info.platform.clone_from(first);
        match comment.get(1) {
            Some(second) => {
                info.os.clone_from(second);
                if let Some(localization) = comment.get(3) {
                    info.localization.clone_from(localization);
                }
            }
            None => info.os.clone_from(first),
        }
    }
}

fn dalvik(info: &mut OsInfo, comment: &[String]) {
    let Some(first) = comment.first() else {
        return;
    };

    if first.starts_with("Linux") {
        info.platform.clone_from(first);
        if let Some(third) = comment.get(2) {
            info.os.clone_from(third);
        }
        info.mobile = true;
    }
}

fn ios(info: &mut OsInfo, cfnetwork: &str, darwin: &str) {
    info.platform = "iOS".to_owned();
    // unresolved builds keep the trailing space ("iOS ")
    info.os = format!("iOS {}", ios_version(cfnetwork, darwin).unwrap_or_default());
    info.mobile = true;
}
