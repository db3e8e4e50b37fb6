//! Auto-update check against GitHub releases

use super::App;
use crate::constants::{APP_VERSION, REPO_NAME, REPO_OWNER};
use eframe::egui;
use tracing::{debug, error, info, warn};

/// Latest published release, if one is newer than the running binary.
fn newer_release() -> Result<Option<(String, String)>, self_update::errors::Error> {
    let releases = self_update::backends::github::ReleaseList::configure()
        .repo_owner(REPO_OWNER)
        .repo_name(REPO_NAME)
        .build()?
        .fetch()?;

    let Some(latest) = releases.into_iter().next() else {
        debug!("No GitHub releases found");
        return Ok(None);
    };
    debug!(latest = %latest.version, current = APP_VERSION, "Fetched latest release");

    if App::version_newer(&latest.version, APP_VERSION) {
        Ok(Some((latest.version, latest.body.unwrap_or_default())))
    } else {
        Ok(None)
    }
}

impl App {
    /// One check per process, on a background thread. A hit lands in
    /// egui temp memory and is picked up by poll_update_results.
    pub fn check_for_updates(&mut self, ctx: &egui::Context) {
        if self.update_check_done {
            return;
        }
        self.update_check_done = true;

        let ctx = ctx.clone();
        info!(current = APP_VERSION, "Starting update check");

        std::thread::spawn(move || {
            match newer_release() {
                Ok(Some((version, body))) => {
                    info!(version = %version, "App update available");
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp("app_update".into(), version);
                        mem.data.insert_temp("app_update_body".into(), body);
                    });
                    ctx.request_repaint();
                }
                Ok(None) => debug!("App is up to date"),
                Err(e) => warn!(error = %e, "Failed to fetch app releases"),
            }
            info!("Update check complete");
        });
    }

    pub fn version_newer(new: &str, current: &str) -> bool {
        let parse = |s: &str| -> (u32, u32, u32) {
            let mut nums = s
                .trim_start_matches('v')
                .split('.')
                .filter_map(|part| part.parse().ok());
            (
                nums.next().unwrap_or(0),
                nums.next().unwrap_or(0),
                nums.next().unwrap_or(0),
            )
        };
        parse(new) > parse(current)
    }

    pub fn perform_app_update(&mut self, ctx: &egui::Context) {
        self.update_in_progress = true;
        let ctx = ctx.clone();

        info!("Starting app update download");
        std::thread::spawn(move || {
            let outcome = self_update::backends::github::Update::configure()
                .repo_owner(REPO_OWNER)
                .repo_name(REPO_NAME)
                .bin_name("prompt-studio")
                .current_version(APP_VERSION)
                .build()
                .and_then(|updater| updater.update());

            ctx.memory_mut(|mem| match outcome {
                Ok(status) => {
                    info!(version = %status.version(), "App update downloaded");
                    mem.data
                        .insert_temp("app_update_done".into(), status.version().to_string());
                }
                Err(e) => {
                    error!(error = %e, "App update failed");
                    mem.data.insert_temp("app_update_error".into(), e.to_string());
                }
            });
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comparison() {
        assert!(App::version_newer("0.2.0", "0.1.0"));
        assert!(App::version_newer("v1.0.0", "0.9.9"));
        assert!(!App::version_newer("0.1.0", "0.1.0"));
        assert!(!App::version_newer("0.1.0", "0.2.0"));
        assert!(App::version_newer("0.1.10", "0.1.9"));
    }
}
