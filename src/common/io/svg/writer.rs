//! SVG document writing.

use std::io::{Result, Write};

/// String-based SVG writer. The finished document is rasterized or written to disk by the caller.
pub(crate) struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

impl SvgStringWriter {
    pub(crate) fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub(crate) fn into_string(self) -> String {
        // Only `str` data is ever written.
        String::from_utf8_lossy(&self.buffer).into_owned()
    }

    /// Write the XML declaration and opening <svg> tag.
    pub(crate) fn write_header(&mut self, width: u32, height: u32) -> Result<()> {
        writeln!(self, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
        writeln!(self, r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"##)?;
        Ok(())
    }

    /// Write the <defs> block: embedded style rules plus the land outline referenced by the clip path.
    pub(crate) fn write_defs(&mut self, css: &str, land_path: &str) -> Result<()> {
        writeln!(self, "<defs>")?;
        writeln!(self, r#"<style type="text/css"><![CDATA[{css}]]></style>"#)?;
        writeln!(self, r#"<path id="land" d="{land_path}"/>"#)?;
        writeln!(self, "</defs>")?;
        Ok(())
    }

    /// Write the clip path that restricts drawing to the land outline, and the background rect.
    /// SVG element names are case-sensitive; `clipPath` must keep its capital P.
    pub(crate) fn write_land_clip(&mut self, width: u32, height: u32) -> Result<()> {
        writeln!(self, r##"<clipPath id="clip-land"><use xlink:href="#land" href="#land"/></clipPath>"##)?;
        writeln!(self, r#"<rect class="background" width="{width}" height="{height}"/>"#)?;
        Ok(())
    }

    /// Open a group clipped to the land outline.
    pub(crate) fn open_clipped_group(&mut self) -> Result<()> {
        writeln!(self, r#"<g clip-path="url(#clip-land)">"#)
    }

    pub(crate) fn close_group(&mut self) -> Result<()> {
        writeln!(self, "</g>")
    }

    /// Write a single path with a CSS class.
    pub(crate) fn write_path(&mut self, class: &str, d: &str) -> Result<()> {
        writeln!(self, r#"<path class="{class}" d="{d}"/>"#)
    }

    /// Write the closing </svg> tag.
    pub(crate) fn write_footer(&mut self) -> Result<()> {
        writeln!(self, "</svg>")
    }
}
