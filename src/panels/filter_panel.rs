// src/panels/filter_panel.rs

use crate::ui::Shell;
use elemview::query::sort::SORT_CHOICES;
use elemview::query::{FilterSpec, SortDirection, SortField, SortSpec};
use gtk4::prelude::*;
use gtk4::{
    Align, Box, Button, CheckButton, Expander, Label, Orientation, PolicyType, ScrolledWindow,
};

/// Collapsible filter checkboxes plus the sort buttons.
pub struct FilterPanel {
    pub container: Expander,
    facet_box: Box,
    sort_buttons: Vec<(SortField, Button)>,
}

impl FilterPanel {
    pub fn new() -> Self {
        let container = Expander::new(Some("Filter & Sort"));
        container.set_margin_start(12);
        container.set_margin_end(12);

        let vbox = Box::new(Orientation::Vertical, 10);
        vbox.set_margin_top(8);
        vbox.set_margin_bottom(8);

        let facet_box = Box::new(Orientation::Horizontal, 16);
        vbox.append(&facet_box);

        // Sort row
        let sort_row = Box::new(Orientation::Horizontal, 6);
        let sort_label = Label::new(Some("Sort by:"));
        sort_label.set_margin_end(4);
        sort_row.append(&sort_label);

        let mut sort_buttons = Vec::new();
        for field in SORT_CHOICES {
            let btn = Button::with_label(&field.label());
            btn.add_css_class("flat");
            sort_row.append(&btn);
            sort_buttons.push((field, btn));
        }

        let spacer = Box::new(Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        sort_row.append(&spacer);

        let clear = Button::with_label("Clear All");
        clear.set_action_name(Some("app.reset_filters"));
        sort_row.append(&clear);
        vbox.append(&sort_row);

        container.set_child(Some(&vbox));

        Self {
            container,
            facet_box,
            sort_buttons,
        }
    }

    pub fn connect(&self, shell: &Shell) {
        for (field, btn) in &self.sort_buttons {
            let field = *field;
            let shell = shell.clone();
            btn.connect_clicked(move |_| {
                let sort = {
                    let mut st = shell.state.borrow_mut();
                    st.toggle_sort(field);
                    st.sort
                };
                shell.filters.sync_sort(&sort);
                shell.refresh_list();
            });
        }
    }

    /// Arrow on the active sort button, plain labels elsewhere.
    pub fn sync_sort(&self, sort: &SortSpec) {
        for (field, btn) in &self.sort_buttons {
            if *field == sort.field {
                let arrow = match sort.direction {
                    SortDirection::Ascending => "↑",
                    SortDirection::Descending => "↓",
                };
                btn.set_label(&format!("{} {}", field.label(), arrow));
                btn.remove_css_class("flat");
                btn.add_css_class("suggested-action");
            } else {
                btn.set_label(&field.label());
                btn.remove_css_class("suggested-action");
                btn.add_css_class("flat");
            }
        }
    }

    pub fn sync_header(&self, filters: &FilterSpec) {
        let n = filters.active_count();
        if n > 0 {
            self.container.set_label(Some(&format!("Filter & Sort ({})", n)));
        } else {
            self.container.set_label(Some("Filter & Sort"));
        }
    }

    /// Rebuilds the checkbox columns from the current dataset's facets.
    /// Checkboxes reflect the active filters at the time of the call.
    pub fn rebuild(&self, shell: &Shell) {
        while let Some(child) = self.facet_box.first_child() {
            self.facet_box.remove(&child);
        }

        let facets = shell.state.borrow().facets();
        let active = shell.state.borrow().filters.clone();

        self.facet_box.append(&facet_column(
            shell,
            "Category",
            &facets.categories,
            |v| v.clone(),
            active.category.iter().cloned().collect(),
            |f, v| f.toggle_category(v),
        ));
        self.facet_box.append(&facet_column(
            shell,
            "Group",
            &facets.groups,
            |v| v.to_string(),
            active.group.iter().cloned().collect(),
            |f, v| f.toggle_group(*v),
        ));
        self.facet_box.append(&facet_column(
            shell,
            "Period",
            &facets.periods,
            |v| v.to_string(),
            active.period.iter().cloned().collect(),
            |f, v| f.toggle_period(*v),
        ));
        self.facet_box.append(&facet_column(
            shell,
            "Block",
            &facets.blocks,
            |v| v.to_uppercase(),
            active.block.iter().cloned().collect(),
            |f, v| f.toggle_block(v),
        ));
        self.facet_box.append(&facet_column(
            shell,
            "Standard State",
            &facets.standard_states,
            |v| v.clone(),
            active.standard_state.iter().cloned().collect(),
            |f, v| f.toggle_standard_state(v),
        ));

        self.sync_header(&active);
        self.sync_sort(&shell.state.borrow().sort);
    }
}

fn facet_column<T: Clone + PartialEq + 'static>(
    shell: &Shell,
    title: &str,
    values: &[T],
    label: impl Fn(&T) -> String,
    active: Vec<T>,
    toggle: fn(&mut FilterSpec, &T),
) -> Box {
    let column = Box::new(Orientation::Vertical, 4);

    let heading = Label::new(None);
    heading.set_markup(&format!("<b>{}</b>", title));
    heading.set_halign(Align::Start);
    column.append(&heading);

    let list = Box::new(Orientation::Vertical, 0);
    for value in values {
        let check = CheckButton::with_label(&label(value));
        check.set_active(active.contains(value));

        let shell = shell.clone();
        let value = value.clone();
        check.connect_toggled(move |_| {
            toggle(&mut shell.state.borrow_mut().filters, &value);
            shell.refresh_list();
        });
        list.append(&check);
    }

    let scroll = ScrolledWindow::builder()
        .hscrollbar_policy(PolicyType::Never)
        .max_content_height(160)
        .propagate_natural_height(true)
        .child(&list)
        .build();
    column.append(&scroll);
    column
}
