/// Normalize the name of the operating system.
///
/// Only `<platform> NT <version>` names with a known NT version are
/// mapped, e.g. `Windows NT 6.1` becomes `Windows 7`. Any other name
/// is returned as is.
#[must_use]
pub fn normalize_os(name: &str) -> &str {
    let mut parts = name.splitn(3, ' ');
    let (Some(_), Some("NT"), Some(version)) = (parts.next(), parts.next(), parts.next()) else {
        return name;
    };

    match version {
        "5.0" => "Windows 2000",
        "5.01" => "Windows 2000, Service Pack 1 (SP1)",
        "5.1" => "Windows XP",
        "5.2" => "Windows XP x64 Edition",
        "6.0" => "Windows Vista",
        "6.1" => "Windows 7",
        "6.2" => "Windows 8",
        "6.3" => "Windows 8.1",
        "10.0" => "Windows 10",
        _ => name,
    }
}
