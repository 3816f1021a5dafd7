/// Platform detected from a visitor's user-agent string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
    Unknown,
}

impl Platform {
    /// Detect the platform from a raw user-agent string.
    ///
    /// Case-insensitive substring tests, first match wins. The order is
    /// load-bearing: "mac" is checked before "win" so strings carrying both
    /// resolve to Mac, and Android devices report "Linux" in their
    /// user-agent, so "android" excludes the Linux match.
    ///
    /// Total over all inputs; anything unrecognized is `Unknown`.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_lowercase();

        if ua.contains("mac") {
            Platform::Mac
        } else if ua.contains("win") {
            Platform::Windows
        } else if ua.contains("linux") && !ua.contains("android") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }
}
