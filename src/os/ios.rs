/// iOS release advertised by a CFNetwork build.
#[derive(Debug, Clone, Copy)]
enum Release {
    Fixed(&'static str),
    /// The build shipped with more than one release,
    /// keyed by the Darwin kernel version.
    ByDarwin(&'static [(&'static str, &'static str)]),
}

const CFNETWORK_RELEASES: &[(&str, Release)] = &[
    // ~9
    ("758.0.2", Release::Fixed("9.0")),
    ("758.1.6", Release::Fixed("9.2 Beta 3")),
    ("758.2.7", Release::Fixed("9.2 Beta 4")),
    (
        "758.2.8",
        Release::ByDarwin(&[("15.0.0", "9.2.1"), ("15.4.0", "9.3 Beta 7")]),
    ),
    ("758.3.15", Release::Fixed("9.3.1")),
    // ~8
    ("711.5.6", Release::Fixed("8.4.1")),
    ("711.4.6", Release::Fixed("8.4")),
    ("711.3.18", Release::Fixed("8.3")),
    ("711.2.23", Release::Fixed("8.2")),
    ("711.1.16", Release::Fixed("8.1.3")),
    ("711.1.12", Release::Fixed("8.1.0")),
    ("711.0.6", Release::Fixed("8.0.2")),
    // ~7
    ("672.1.15", Release::Fixed("7.1.2")),
    ("672.1.14", Release::Fixed("7.1.1")),
    ("672.1.13", Release::Fixed("7.1")),
    ("672.1.12", Release::Fixed("7.1-b5")),
    ("672.0.8", Release::Fixed("7.0.6")),
    ("672.0.2", Release::Fixed("7.0.2")),
    // ~6
    ("609.1.4", Release::Fixed("6.1.4")),
    ("609", Release::Fixed("6.0.1")),
    ("602", Release::Fixed("6.0-b3")),
    // ~5
    ("548.1.4", Release::Fixed("5.1")),
    ("548.0.4", Release::Fixed("5.0.1")),
    ("548.0.3", Release::Fixed("5")),
];

/// Look up the iOS version for a CFNetwork build and Darwin kernel version.
///
/// Returns `None` for unknown builds, as well as for builds
/// shared by multiple releases paired with an unknown Darwin version.
#[must_use]
pub fn ios_version(cfnetwork: &str, darwin: &str) -> Option<&'static str> {
    let (_, release) = CFNETWORK_RELEASES
        .iter()
        .find(|(build, _)| *build == cfnetwork)?;
    match release {
        Release::Fixed(version) => Some(*version),
        Release::ByDarwin(releases) => releases
            .iter()
            .find(|(kernel, _)| *kernel == darwin)
            .map(|(_, version)| *version),
    }
}
