// src/ui/list_view.rs

use elemview::model::elements::DEFAULT_CPK_COLOR;
use elemview::model::NormalizedElement;
use elemview::rendering::primitives::hex_to_rgb;
use gtk4::prelude::*;
use gtk4::{
    glib, Align, Box, Button, FlowBox, Label, Orientation, PolicyType, ScrolledWindow,
    SelectionMode,
};

/// Card grid for the filtered, sorted element list.
pub struct ElementList {
    pub container: Box,
    result_label: Label,
    flow: FlowBox,
    scroll: ScrolledWindow,
    empty: Box,
}

impl ElementList {
    pub fn new() -> Self {
        let container = Box::new(Orientation::Vertical, 6);
        container.set_vexpand(true);

        let result_label = Label::new(None);
        result_label.set_halign(Align::Start);
        result_label.set_margin_start(12);
        result_label.add_css_class("dim-label");
        container.append(&result_label);

        let flow = FlowBox::builder()
            .selection_mode(SelectionMode::None)
            .homogeneous(true)
            .min_children_per_line(2)
            .max_children_per_line(12)
            .row_spacing(8)
            .column_spacing(8)
            .margin_start(12)
            .margin_end(12)
            .margin_bottom(12)
            .valign(Align::Start)
            .build();

        let scroll = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vexpand(true)
            .child(&flow)
            .build();
        container.append(&scroll);

        // Shown instead of the grid when nothing matches
        let empty = Box::new(Orientation::Vertical, 10);
        empty.set_valign(Align::Center);
        empty.set_vexpand(true);
        let msg = Label::new(Some("No elements match your search criteria."));
        msg.add_css_class("title-4");
        let reset = Button::with_label("Reset Filters");
        reset.set_halign(Align::Center);
        reset.set_action_name(Some("app.reset_filters"));
        empty.append(&msg);
        empty.append(&reset);
        empty.set_visible(false);
        container.append(&empty);

        Self {
            container,
            result_label,
            flow,
            scroll,
            empty,
        }
    }

    /// Replaces the cards with `elements`, keeping their order.
    pub fn populate(&self, elements: &[NormalizedElement], total: usize) {
        while let Some(child) = self.flow.first_child() {
            self.flow.remove(&child);
        }

        self
            .result_label
            .set_text(&format!("Showing {} of {} elements", elements.len(), total));

        let nothing = elements.is_empty();
        self.empty.set_visible(nothing);
        self.scroll.set_visible(!nothing);

        for element in elements {
            self.flow.insert(&card(element), -1);
        }
    }
}

fn card(e: &NormalizedElement) -> Button {
    let vbox = Box::new(Orientation::Vertical, 2);
    vbox.set_margin_top(6);
    vbox.set_margin_bottom(6);
    vbox.set_margin_start(6);
    vbox.set_margin_end(6);

    let top = Box::new(Orientation::Horizontal, 0);
    let number = Label::new(Some(&e.atomic_number.to_string()));
    number.set_hexpand(true);
    number.set_halign(Align::Start);
    let mass = Label::new(Some(&format!("{:.2}", e.atomic_mass)));
    mass.set_halign(Align::End);
    mass.add_css_class("dim-label");
    top.append(&number);
    top.append(&mass);
    vbox.append(&top);

    let color = if hex_to_rgb(&e.cpk_color).is_some() {
        e.cpk_color.as_str()
    } else {
        DEFAULT_CPK_COLOR
    };
    let symbol = Label::new(None);
    symbol.set_markup(&format!(
        "<span size='xx-large' weight='bold' foreground='{}'>{}</span>",
        color,
        glib::markup_escape_text(&e.symbol)
    ));
    vbox.append(&symbol);

    let name = Label::new(Some(&e.name));
    name.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    vbox.append(&name);

    let category = Label::new(Some(&e.category));
    category.add_css_class("caption");
    category.add_css_class("dim-label");
    category.set_ellipsize(gtk4::pango::EllipsizeMode::End);
    vbox.append(&category);

    let position = Label::new(Some(&format!("Group {} · Period {}", e.group, e.period)));
    position.add_css_class("caption");
    vbox.append(&position);

    let button = Button::builder().child(&vbox).build();
    button.set_tooltip_text(Some(&e.name));
    button.set_action_name(Some("app.open_element"));
    button.set_action_target_value(Some(&e.atomic_number.to_variant()));
    button
}
