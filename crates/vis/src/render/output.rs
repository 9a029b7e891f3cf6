use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::render::OutputStream;
use crate::render::error::RenderError;

const FILE_NAME: &str = "index.html";

/// The `index.html` file of an output directory.
pub struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl OutputFile {
    pub fn new(dir: &Path) -> Result<OutputFile, RenderError> {
        let path = dir.join(FILE_NAME);
        let file = File::create(&path)?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn flush(&mut self) -> Result<(), RenderError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.writer.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<(), RenderError> {
        self.push_str(data);
        Ok(())
    }
}
