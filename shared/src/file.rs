/// Media types the picker advertises; anything else is only warned about.
pub const ACCEPTED_MEDIA_PREFIX: &str = "image/";

/// Soft upload size hint shown next to the picker (10 MB). Not enforced.
pub const SOFT_SIZE_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

/// A file the user picked for upload.
///
/// `Preview` is the locally resolvable handle used to display the file before
/// it is submitted. Dropping the handle releases it, so whoever owns the
/// handle decides its lifetime.
pub trait UploadFile: Clone {
    type Preview;

    fn name(&self) -> String;
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
    fn create_preview(&self) -> Self::Preview;
}

/// Reasons a selection falls outside what the picker advertises.
pub fn selection_warnings<F: UploadFile>(file: &F) -> Vec<String> {
    let mut warnings = Vec::new();

    let media_type = file.media_type();
    if !media_type.starts_with(ACCEPTED_MEDIA_PREFIX) {
        warnings.push(format!(
            "{} has media type {:?}, expected an image",
            file.name(),
            media_type
        ));
    }

    if file.size() > SOFT_SIZE_LIMIT_BYTES {
        warnings.push(format!(
            "{} is {} bytes, above the {} byte upload hint",
            file.name(),
            file.size(),
            SOFT_SIZE_LIMIT_BYTES
        ));
    }

    warnings
}
