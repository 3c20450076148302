use super::{Browser, Engine, Heuristic, OsInfo, Section, extract_platform, normalize_os};

/// Detects the operating system, platform and localization
/// from the tokenized sections of a User-Agent header.
///
/// The detector itself holds only configuration and can be
/// shared freely, each pass produces its own [`OsInfo`].
#[derive(Debug, Clone, Default)]
pub struct OsDetector {
    crawler: bool,
}

impl OsDetector {
    /// Create a new [`OsDetector`].
    #[must_use]
    pub const fn new() -> Self {
        Self { crawler: false }
    }

    /// Mark the User-Agent as belonging to a known automated crawler.
    #[must_use]
    pub const fn with_crawler(mut self, crawler: bool) -> Self {
        self.crawler = crawler;
        self
    }

    /// Mark the User-Agent as belonging to a known automated crawler.
    pub const fn set_crawler(&mut self, crawler: bool) -> &mut Self {
        self.crawler = crawler;
        self
    }

    /// Detect the operating system for the given sections.
    ///
    /// The first section with a recognised name (`Mozilla`, `Opera`,
    /// `Dalvik` or `CFNetwork` paired with a `Darwin` section anywhere in
    /// the header) decides the heuristic, all later sections are ignored. The [`Browser`] is used for
    /// its [`Engine`] and can have its name relabelled.
    pub fn detect(&self, sections: &[Section], browser: &mut Browser) -> OsInfo {
        let mut info = OsInfo::default();

        for section in sections {
            let heuristic = match section.name.as_str() {
                "Mozilla" => {
                    info.platform = extract_platform(&section.comment).to_owned();
                    // IE11 is no longer recognised by its comment, so
                    // the os is set here for Trident to keep.
                    if info.platform == "Windows"
                        && let Some(first) = section.comment.first()
                    {
                        info.os = normalize_os(first).to_owned();
                    }

                    match browser.engine {
                        Engine::Unknown => {
                            tracing::debug!(
                                section = %section.name,
                                platform = %info.platform,
                                "os detection: unknown engine, undecided",
                            );
                            info.undecided = true;
                            return info;
                        }
                        Engine::Gecko => Some(Heuristic::Gecko),
                        Engine::AppleWebKit => Some(Heuristic::WebKit {
                            crawler: self.crawler,
                        }),
                        Engine::Trident => Some(Heuristic::Trident),
                    }
                }
                "Opera" => (!section.comment.is_empty()).then_some(Heuristic::Opera),
                "Dalvik" => (!section.comment.is_empty()).then_some(Heuristic::Dalvik),
                "CFNetwork" => {
                    // Darwin can be found on either side of CFNetwork
                    let Some(darwin) = sections.iter().find(|other| other.name == "Darwin") else {
                        tracing::trace!(
                            cfnetwork = %section.version,
                            "os detection: CFNetwork without Darwin section, continue",
                        );
                        continue;
                    };
                    Some(Heuristic::Ios {
                        cfnetwork: &section.version,
                        darwin: &darwin.version,
                    })
                }
                _ => continue,
            };

            match heuristic {
                Some(heuristic) => {
                    tracing::trace!(
                        section = %section.name,
                        ?heuristic,
                        "os detection: apply heuristic",
                    );
                    heuristic.apply(&mut info, browser, &section.comment);
                }
                None => tracing::trace!(
                    section = %section.name,
                    "os detection: section without comment",
                ),
            }
            return info;
        }

        tracing::debug!(
            sections = sections.len(),
            "os detection: no recognised section, undecided",
        );
        info.undecided = true;
        info
    }
}

/// Detect the operating system for the given sections,
/// using a default [`OsDetector`].
pub fn detect_os(sections: &[Section], browser: &mut Browser) -> OsInfo {
    OsDetector::new().detect(sections, browser)
}
