use super::*;

#[test]
fn headings_render_as_html() {
    let html = render_markdown("## About This Platform");
    assert!(html.contains("<h2>About This Platform</h2>"));
}

#[test]
fn tables_are_enabled() {
    let html = render_markdown("| a | b |\n| --- | --- |\n| 1 | 2 |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>1</td>"));
}

#[test]
fn embedded_document_mentions_the_model_grid() {
    let html = render_markdown(DOCUMENTATION);
    assert!(html.contains("<table>"));
    assert!(html.contains("DeepMLP"));
}
