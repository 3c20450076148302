//! Operating system inference for tokenized User-Agent headers.
//!
//! Each rendering engine (or client family) encodes its platform and
//! operating system differently in the comment of a User-Agent, hence
//! there is one [`Heuristic`] per engine. The [`OsDetector`] picks the
//! heuristic based on the first recognised section.

mod info;
pub use info::{Browser, Engine, OsInfo, Section};

mod normalize;
pub use normalize::normalize_os;

mod platform;
pub use platform::extract_platform;

mod ios;
pub use ios::ios_version;

mod heuristic;
pub use heuristic::Heuristic;

mod detect;
pub use detect::{OsDetector, detect_os};
