//! Renders rewrite documents in the IIS `<rewriteMaps>` layout
//!
//! One tab per nesting level, one `<add />` line per entry and a newline
//! after every line:
//!
//! ```text
//! <rewriteMaps>
//! 	<rewriteMap name="Redirects">
//! 		<add key="/old" value="/new" />
//! 	</rewriteMap>
//! </rewriteMaps>
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::escape::escape;

use crate::error::{self, Result};
use crate::rewrite::{RedirectPair, RewriteDocument, RewriteMap};

/// Render a single `<add key=".." value=".." />` element without indentation
pub fn render_entry(pair: &RedirectPair) -> String {
    format!(
        r#"<add key="{}" value="{}" />"#,
        escape(pair.from.as_str()),
        escape(pair.to.as_str())
    )
}

/// Render a complete document
pub fn render(document: &RewriteDocument) -> String {
    let mut out = String::from("<rewriteMaps>\n");
    for map in &document.maps {
        render_map(&mut out, map);
    }
    out.push_str("</rewriteMaps>\n");
    out
}

fn render_map(out: &mut String, map: &RewriteMap) {
    out.push_str(&format!(
        "\t<rewriteMap name=\"{}\">\n",
        escape(map.name.as_str())
    ));
    for pair in &map.entries {
        out.push_str("\t\t");
        out.push_str(&render_entry(pair));
        out.push('\n');
    }
    out.push_str("\t</rewriteMap>\n");
}

/// Write `document` to `path`, truncating whatever was there
pub fn write_document(path: &Path, document: &RewriteDocument) -> Result<()> {
    let file = File::create(path).map_err(|e| error::fs::write_failed(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render(document).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| error::fs::write_failed(path, e))
}
