//! Table binding configuration
//!
//! The rendering widget is configured through an explicit struct with
//! named callback fields, so every display transform is testable without
//! a widget present. [`properties_table`] builds the standard two-column
//! binding for a slide property dictionary.

use crate::classify::classify;
use crate::model::PropertyEntry;
use crate::model::PropertyValue;

/// Render mode the widget requests a cell in.
///
/// `Display` is what ends up on screen, `Sort` is the string the widget
/// orders rows by, and `Raw` is the unmodified field for everything else
/// (filtering, export).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    /// On-screen rendering.
    Display,
    /// Ordering string.
    Sort,
    /// Unmodified field data.
    Raw,
}

/// Static widget flags, fixed at setup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Show the informational row-count footer.
    pub info: bool,
    /// Paginate rows instead of scrolling.
    pub paging: bool,
    /// Allow row selection.
    pub selection: bool,
    /// Height of the vertical scroll viewport, in rows.
    pub scroll_rows: u16,
    /// Cluster rows under group header rows.
    pub row_group: bool,
    /// Marker substituted for literal newlines in textual values.
    pub line_break: String,
}

impl Default for TableOptions {
    /// The properties-table configuration: no info footer, no paging, no
    /// selection, fixed-height scroll region, row grouping on.
    fn default() -> Self {
        Self {
            info: false,
            paging: false,
            selection: false,
            scroll_rows: 20,
            row_group: true,
            line_break: "<br>".to_string(),
        }
    }
}

/// Per-column cell renderer.
pub type CellRender = Box<dyn Fn(&PropertyEntry, RenderKind) -> String + Send + Sync>;

/// Row-grouping key callback.
pub type GroupKey = Box<dyn Fn(&PropertyEntry) -> String + Send + Sync>;

/// One column of the bound table.
pub struct Column {
    /// Column header text.
    pub header: String,
    /// Cell renderer, called once per row and render mode.
    pub render: CellRender,
}

impl Column {
    /// Creates a column from a header and a render callback.
    pub fn new(
        header: impl Into<String>,
        render: impl Fn(&PropertyEntry, RenderKind) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            header: header.into(),
            render: Box::new(render),
        }
    }
}

/// Everything the rendering widget needs to present a property table.
pub struct TableConfig {
    /// Columns in display order; the widget sorts rows by the first
    /// column's [`RenderKind::Sort`] rendering.
    pub columns: Vec<Column>,
    /// Row-grouping key; rows with equal keys cluster under one header.
    pub group_by: Option<GroupKey>,
    /// Static widget flags.
    pub options: TableOptions,
}

/// Builds the standard two-column slide properties table.
///
/// Key column: display mode shows only the residual key (the group is
/// shown as a row-group header instead); sort mode prepends the group so a
/// plain string sort keeps each group's rows contiguous; raw mode returns
/// the key untouched. Value column: literal newlines in textual values
/// become the configured line-break marker, any other value renders
/// through its natural display form regardless of mode.
pub fn properties_table(options: TableOptions) -> TableConfig {
    let line_break = options.line_break.clone();
    TableConfig {
        columns: vec![
            Column::new("Property", |entry, kind| render_key(&entry.key, kind)),
            Column::new("Value", move |entry, _| {
                render_value(&entry.value, &line_break)
            }),
        ],
        group_by: Some(Box::new(|entry| classify(&entry.key).group.to_string())),
        options,
    }
}

/// Renders the key cell for one render mode.
pub fn render_key(key: &str, kind: RenderKind) -> String {
    match kind {
        RenderKind::Display => classify(key).key,
        RenderKind::Sort => {
            let c = classify(key);
            format!("{}.{}", c.group, c.key)
        }
        RenderKind::Raw => key.to_string(),
    }
}

/// Renders a value cell.
///
/// Textual values get every literal newline replaced by `line_break`;
/// everything else renders through its display form.
pub fn render_value(value: &PropertyValue, line_break: &str) -> String {
    match value {
        PropertyValue::String(s) => s.replace('\n', line_break),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_render_modes() {
        assert_eq!(
            render_key("tiff.ImageDescription.Make", RenderKind::Display),
            "Make"
        );
        assert_eq!(
            render_key("tiff.ImageDescription.Make", RenderKind::Sort),
            "TIFF Image Description.Make"
        );
        assert_eq!(
            render_key("tiff.ImageDescription.Make", RenderKind::Raw),
            "tiff.ImageDescription.Make"
        );
    }

    #[test]
    fn test_value_render_replaces_newlines() {
        let value = PropertyValue::from("line1\nline2");
        assert_eq!(render_value(&value, "<br>"), "line1<br>line2");

        let value = PropertyValue::from("a\nb\nc");
        assert_eq!(render_value(&value, "<br>"), "a<br>b<br>c");
    }

    #[test]
    fn test_value_render_passes_non_strings_through() {
        assert_eq!(render_value(&PropertyValue::Int(42), "<br>"), "42");
        assert_eq!(render_value(&PropertyValue::Null, "<br>"), "");
        assert_eq!(render_value(&PropertyValue::Float(0.25), "<br>"), "0.25");
    }

    #[test]
    fn test_sort_rendering_keeps_groups_contiguous() {
        let keys = [
            "openslide.vendor",
            "tiff.Software",
            "aperio.AppMag",
            "tiff.ImageDescription.Make",
            "openslide.mpp-x",
        ];
        let mut sorted: Vec<String> = keys
            .iter()
            .map(|k| render_key(k, RenderKind::Sort))
            .collect();
        sorted.sort();

        // After sorting, each group's rows sit next to each other
        let groups: Vec<&str> = sorted
            .iter()
            .map(|s| s.split('.').next().unwrap())
            .collect();
        let mut deduped = groups.clone();
        deduped.dedup();
        let mut unique = groups.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(deduped.len(), unique.len());
    }

    #[test]
    fn test_default_options_match_fixed_configuration() {
        let options = TableOptions::default();
        assert!(!options.info);
        assert!(!options.paging);
        assert!(!options.selection);
        assert!(options.row_group);
        assert_eq!(options.line_break, "<br>");
    }

    #[test]
    fn test_properties_table_binding() {
        let config = properties_table(TableOptions::default());
        assert_eq!(config.columns.len(), 2);

        let entry = PropertyEntry::new("openslide.vendor", "leica");
        assert_eq!(
            (config.columns[0].render)(&entry, RenderKind::Display),
            "vendor"
        );
        assert_eq!(
            (config.columns[0].render)(&entry, RenderKind::Sort),
            "OpenSlide Properties.vendor"
        );
        assert_eq!(
            (config.columns[1].render)(&entry, RenderKind::Display),
            "leica"
        );

        let group_by = config.group_by.expect("grouping enabled");
        assert_eq!(group_by(&entry), "OpenSlide Properties");
    }

    #[test]
    fn test_properties_table_honors_line_break_override() {
        let options = TableOptions {
            line_break: " / ".to_string(),
            ..TableOptions::default()
        };
        let config = properties_table(options);
        let entry = PropertyEntry::new("tiff.ImageDescription", "one\ntwo");
        assert_eq!(
            (config.columns[1].render)(&entry, RenderKind::Display),
            "one / two"
        );
    }
}
