//! Selectors for the toolkit's built-in control substructures.
#![allow(missing_docs)]

pub const CHOICE_BOX_LABEL: &str = ".choice-box > .label";
pub const COLOR_PICKER: &str = ".color-picker";
pub const COLOR_PICKER_LABEL: &str = ".color-picker-label";
pub const COLUMN_HEADER: &str = ".column-header";
pub const COLUMN_HEADER_BACKGROUND: &str = ".column-header-background";
pub const COLUMN_HEADER_LABEL: &str = ".column-header > .label";
pub const FILLER: &str = ".filler";
pub const LABEL: &str = ".label";
pub const LIST_VIEW_HORIZONTAL_SCROLLBAR: &str = ".list-view > .virtual-flow > .scroll-bar:horizontal";
pub const LIST_VIEW_VERTICAL_SCROLLBAR: &str = ".list-view > .virtual-flow > .scroll-bar:vertical";
pub const MENU_BUTTON_LABEL: &str = ".menu-button > .label";
pub const PROGRESS_BAR_BAR: &str = ".progress-bar > .bar";
pub const SCROLL_BAR: &str = ".scroll-bar";
pub const SCROLL_PANE_VIEWPORT: &str = ".scroll-pane > .viewport";
pub const SPLIT_PANE_DIVIDER: &str = ".split-pane-divider";
pub const TAB: &str = ".tab-pane > .tab-header-area > .headers-region > .tab";
pub const TAB_HEADER_AREA: &str = ".tab-pane > .tab-header-area";
pub const TAB_HEADER_BACKGROUND: &str = ".tab-pane > .tab-header-area > .tab-header-background";
pub const TAB_LABEL: &str = ".tab-pane > .tab-header-area > .headers-region > .tab > .tab-container > .tab-label";
pub const TEXT: &str = ".text";
pub const TEXT_AREA_CONTENT: &str = ".text-area .content";
pub const TITLED_PANE_TITLE: &str = ".titled-pane > .title";
pub const TREE_CELL_DISCLOSURE_ARROW: &str = ".tree-cell > .tree-disclosure-node > .arrow";
pub const VIRTUAL_FLOW: &str = ".virtual-flow";

/// Join a style class and pseudo-classes into one selector, e.g.
/// `compound(".button", &["hover", "focused"])` is `.button:hover:focused`.
pub fn compound(base: &str, pseudo_classes: &[&str]) -> String {
    let mut selector = base.to_string();
    for pseudo in pseudo_classes {
        selector.push(':');
        selector.push_str(pseudo);
    }
    selector
}

/// Join selectors with the descendant combinator.
pub fn descendant(ancestor: &str, descendant: &str) -> String {
    format!("{ancestor} {descendant}")
}

/// Join selectors with the child combinator.
pub fn child(parent: &str, child: &str) -> String {
    format!("{parent} > {child}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinators() {
        assert_eq!(compound(".button", &["hover", "focused"]), ".button:hover:focused");
        assert_eq!(child(".titled-pane", ".title"), TITLED_PANE_TITLE);
        assert_eq!(descendant(".text-area", ".content"), TEXT_AREA_CONTENT);
    }
}
