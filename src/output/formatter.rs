use std::fmt::Write as _;
use std::io::{self, Write};

use crate::discovery::{GatheredContext, GatheredFile};

pub const TEST_FILE_SEPARATOR: &str = "--- Test File ---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Each file wrapped in a path-carrying `<source_file>` / `<test_file>` block.
    #[default]
    Tagged,
    Plain,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Tagged => "tagged",
            OutputFormat::Plain => "plain",
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn render(context: &GatheredContext, format: OutputFormat) -> String {
        let mut out = String::new();
        match format {
            OutputFormat::Tagged => Self::render_tagged(&mut out, context),
            OutputFormat::Plain => Self::render_plain(&mut out, context),
        }
        out
    }

    pub fn write_context<W: Write>(
        writer: &mut W,
        context: &GatheredContext,
        format: OutputFormat,
    ) -> io::Result<()> {
        writer.write_all(Self::render(context, format).as_bytes())?;
        writer.flush()
    }

    fn render_tagged(out: &mut String, context: &GatheredContext) {
        push_block(out, "source_file", &context.source);
        if let Some(test) = &context.test {
            out.push('\n');
            push_block(out, "test_file", test);
        }
    }

    fn render_plain(out: &mut String, context: &GatheredContext) {
        out.push_str(&context.source.content);
        out.push('\n');
        if let Some(test) = &context.test {
            let _ = write!(out, "\n{TEST_FILE_SEPARATOR}\n\n");
            out.push_str(&test.content);
            out.push('\n');
        }
    }
}

fn push_block(out: &mut String, tag: &str, file: &GatheredFile) {
    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<{tag} path=\"{}\">\n{}\n</{tag}>\n",
        file.path.display(),
        file.content
    );
}
