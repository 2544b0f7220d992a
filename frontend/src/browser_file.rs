use gloo_file::{File as GlooFile, ObjectUrl};
use shared::UploadFile;

/// A file picked in the browser. Its preview is an object URL that is
/// revoked when the last clone of the `ObjectUrl` is dropped.
#[derive(Clone)]
pub struct BrowserFile(GlooFile);

impl BrowserFile {
    pub fn as_blob(&self) -> &web_sys::Blob {
        self.0.as_ref()
    }
}

impl From<GlooFile> for BrowserFile {
    fn from(file: GlooFile) -> Self {
        Self(file)
    }
}

impl From<web_sys::File> for BrowserFile {
    fn from(file: web_sys::File) -> Self {
        Self(GlooFile::from(file))
    }
}

impl UploadFile for BrowserFile {
    type Preview = ObjectUrl;

    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.raw_mime_type()
    }

    fn size(&self) -> u64 {
        self.0.size()
    }

    fn create_preview(&self) -> ObjectUrl {
        ObjectUrl::from(self.0.clone())
    }
}
