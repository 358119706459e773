use nix::unistd::geteuid;

/// `smartctl` needs raw device access, which normally means root.
#[must_use]
pub fn is_root() -> bool {
    geteuid().is_root()
}
