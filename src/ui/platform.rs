/// Host platform identity, as far as layout cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPlatform {
    Apple,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            HostPlatform::Apple
        } else {
            HostPlatform::Other
        }
    }
}
