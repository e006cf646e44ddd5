//! Companion stylesheet written next to the HTML page.

pub const STYLESHEET: &str = "\
body { font-family: system-ui, sans-serif; max-width: 56em; margin: 2em auto; padding: 0 1em; color: #1a1a1a; }
h1 { border-bottom: 2px solid #2c5aa0; padding-bottom: 0.3em; }
code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }
ul.index { columns: 3; list-style: none; padding-left: 0; }
ul.index li { margin: 0.2em 0; }
.method { margin: 2em 0; padding: 1em 1.5em; border: 1px solid #ddd; border-radius: 5px; }
.method-name { margin: 0; color: #2c5aa0; font-family: ui-monospace, monospace; }
.source { margin: 0.2em 0 1em; font-size: 0.85em; color: #666; }
.summary p { margin: 0.4em 0; }
table.parameters { border-collapse: collapse; width: 100%; margin-top: 1em; }
table.parameters th, table.parameters td { border: 1px solid #ddd; padding: 0.4em 0.6em; text-align: left; vertical-align: top; }
table.parameters th { background: #f4f4f4; }
table.parameters td p { margin: 0; }
table.parameters td p + p { margin-top: 0.4em; }
tr.return td { background: #fafaf0; }
.generated { margin-top: 3em; font-size: 0.8em; color: #888; text-align: right; }
";
