/// Presentation layer: render grouped statistics as an HTML report.

pub mod html;
