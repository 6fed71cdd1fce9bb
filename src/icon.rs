// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Decodes the embedded PNG into the RGBA icon shown in the window title
//! bar. Falls back to `None` if decoding fails.

use iced::window::{icon, Icon};

/// Decodes the embedded PNG icon.
/// Returns `None` if the image data cannot be decoded.
pub fn load_window_icon() -> Option<Icon> {
    // Embed the PNG so packaging does not need to locate assets on disk.
    const ICON_BYTES: &[u8] = include_bytes!("../assets/branding/iced_vitrine.png");

    icon::from_file_data(ICON_BYTES, None).ok()
}
