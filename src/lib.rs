//! Operating system inference for User-Agent (UA) headers.
//!
//! This crate takes the tokenized sections of a `User-Agent` header
//! (`Name/Version (comment; tokens)` fragments) together with the previously
//! detected rendering [`Engine`] and infers:
//!
//! - the platform (e.g. `Windows`, `Linux`, `Macintosh`, `iOS`);
//! - the operating system (e.g. `Windows 7`, `Android 4.4.2`, `iOS 9.2.1`);
//! - the localization, when advertised (e.g. `en-US`);
//! - whether the device is mobile;
//! - whether classification was inconclusive ("undecided"), e.g. for bots.
//!
//! ```
//! use uaos::{Browser, Engine, Section, detect_os};
//!
//! // Mozilla/5.0 (Windows NT 6.1; WOW64; rv:12.0) Gecko/20100101 Firefox/12.0
//! let sections = [
//!     Section::new("Mozilla", "5.0").with_comment(["Windows NT 6.1", "WOW64", "rv:12.0"]),
//!     Section::new("Gecko", "20100101"),
//!     Section::new("Firefox", "12.0"),
//! ];
//! let mut browser = Browser::new("Firefox", "12.0", Engine::Gecko);
//!
//! let info = detect_os(&sections, &mut browser);
//! assert_eq!(info.platform(), "Windows");
//! assert_eq!(info.os(), "Windows 7");
//! assert!(!info.is_mobile());
//! assert!(!info.is_undecided());
//! ```
//!
//! # Remarks
//!
//! The inference is a set of heuristics, one per engine, accumulated
//! against real world User-Agents. It does not validate User-Agents and
//! never fails: the worst outcome is an [`OsInfo`] with empty fields,
//! or one marked as [undecided](OsInfo::is_undecided).
//!
//! Tokenizing the header, detecting the browser and engine,
//! and bot detection are all left to the caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error;

pub mod os;
pub use os::{Browser, Engine, OsDetector, OsInfo, Section, detect_os};
