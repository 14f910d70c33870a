use base64::Engine as _;

#[cfg(not(target_arch = "wasm32"))]
use crate::error::PadResult;

/// PNG bytes ready to be offered as a download
#[derive(Clone, PartialEq, Eq)]
pub struct ExportedImage {
    file_name: String,
    png: Vec<u8>,
}

impl ExportedImage {
    pub fn new(file_name: String, png: Vec<u8>) -> Self {
        Self { file_name, png }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn png(&self) -> &[u8] {
        &self.png
    }

    /// `data:` URI the browser can download directly
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    /// Write the image into `dir`, returning the written path
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_dir(&self, dir: &std::path::Path) -> PadResult<std::path::PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)?;
        log::info!("Saved {} ({} bytes)", path.display(), self.png.len());
        Ok(path)
    }

    /// Trigger a client-side download through a temporary anchor element
    #[cfg(target_arch = "wasm32")]
    pub fn offer_download(&self) -> crate::error::PadResult<()> {
        use crate::error::PadError;
        use eframe::wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PadError::Web("no document".to_owned()))?;
        let link = document
            .create_element("a")
            .map_err(|e| PadError::Web(format!("{e:?}")))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| PadError::Web("created element is not an anchor".to_owned()))?;
        link.set_download(&self.file_name);
        link.set_href(&self.data_uri());
        link.click();
        log::info!("Offered {} for download ({} bytes)", self.file_name, self.png.len());
        Ok(())
    }
}

impl std::fmt::Debug for ExportedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportedImage")
            .field("file_name", &self.file_name)
            .field("bytes", &self.png.len())
            .finish()
    }
}
