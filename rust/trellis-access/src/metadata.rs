use crate::{
    AccessMode, Metadata, PermissionSet,
    vocab::auth,
};

/// Exposes the permissions established during authorization as resource
/// metadata, so the outer server can advertise them (e.g. as `WAC-Allow`
/// response headers).
pub trait PermissionMetadataWriter: Send + Sync {
    /// Add permission entries to `metadata`. Existing entries are kept.
    fn annotate(&self, metadata: &mut Metadata, permissions: &PermissionSet);
}

/// Writes one `auth:userMode` entry per mode granted to the requesting agent
/// and one `auth:publicMode` entry per mode granted to everyone.
///
/// Only modes the agent permissions say something about are considered, so
/// an undetermined mode never produces an entry for either audience.
#[derive(Debug, Clone, Copy, Default)]
pub struct WacMetadataWriter;

impl PermissionMetadataWriter for WacMetadataWriter {
    fn annotate(&self, metadata: &mut Metadata, permissions: &PermissionSet) {
        let user = permissions.agent.unwrap_or_default();
        let public = permissions.everyone.unwrap_or_default();

        for mode in AccessMode::ALL {
            if user.get(mode).is_none() {
                continue;
            }
            if user.get(mode) == Some(true) {
                metadata.add(auth::USER_MODE, mode.as_term());
            }
            if public.get(mode) == Some(true) {
                metadata.add(auth::PUBLIC_MODE, mode.as_term());
            }
        }
    }
}
