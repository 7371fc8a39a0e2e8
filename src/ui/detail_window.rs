// src/ui/detail_window.rs

use super::Shell;
use elemview::io::Ticket;
use elemview::model::{CategoryStyle, NormalizedElement};
use elemview::rendering::render_spectrum;
use elemview::spectrum::{self, wavelength_to_rgb, SpectralLine};
use elemview::state::{AppState, DetailTab};
use elemview::utils::report;
use gtk4::prelude::*;
use gtk4::{
    gdk, gio, glib, Align, Box, Button, DrawingArea, EventControllerKey, Frame, Grid, Image, Label,
    LevelBar, Notebook, Orientation, Picture, ScrolledWindow, Spinner, Stack, Window,
};
use std::cell::RefCell;
use std::rc::Rc;

const IMAGE_SIZE: i32 = 260;

/// Opens the modal detail window for `atomic_number`. Does nothing (beyond
/// a log line) if the element is not in the loaded dataset.
pub fn show(shell: &Shell, atomic_number: u32) {
    let Some(ticket) = shell.state.borrow_mut().select(atomic_number) else {
        log::warn!("No element with atomic number {}", atomic_number);
        return;
    };

    let (element, images, lines, tab, style) = {
        let st = shell.state.borrow();
        let Some(element) = st.selected_element().cloned() else {
            return;
        };
        (
            element,
            st.selected_images().unwrap_or_default(),
            st.selected_spectrum().unwrap_or_default(),
            st.detail_tab,
            st.config.spectrum.clone(),
        )
    };
    shell.table_area.queue_draw();

    log::info!("Opened {}", report::title(&element));
    log::debug!("\n{}", report::text_report(&element));
    log::debug!("\n{}", report::spectrum_report(&element, &lines));

    let window = Window::builder()
        .title(report::title(&element))
        .transient_for(&shell.window)
        .modal(true)
        .default_width(760)
        .default_height(680)
        .build();

    let vbox = Box::new(Orientation::Vertical, 12);
    vbox.set_margin_top(16);
    vbox.set_margin_bottom(16);
    vbox.set_margin_start(16);
    vbox.set_margin_end(16);

    vbox.append(&header(&element));

    // Property sections side by side
    let sections = Box::new(Orientation::Horizontal, 12);
    sections.set_homogeneous(true);
    for section in report::detail_sections(&element) {
        sections.append(&section_frame(&section));
    }
    vbox.append(&sections);

    let description = Label::new(Some(report::description(&element)));
    description.set_wrap(true);
    description.set_xalign(0.0);
    vbox.append(&description);

    // Images / spectrum tabs
    let notebook = Notebook::new();
    notebook.set_vexpand(true);
    let images_page = images_page(&shell.state, &images, ticket);
    notebook.append_page(&images_page, Some(&Label::new(Some("Images"))));
    let spectrum_page = spectrum_page(&element, lines, style.width, style.height);
    notebook.append_page(&spectrum_page, Some(&Label::new(Some("Spectral View"))));
    notebook.set_current_page(Some(match tab {
        DetailTab::Images => 0,
        DetailTab::Spectrum => 1,
    }));

    let s_tab = shell.state.clone();
    notebook.connect_switch_page(move |_, _, page| {
        s_tab.borrow_mut().detail_tab = if page == 1 {
            DetailTab::Spectrum
        } else {
            DetailTab::Images
        };
    });

    let scroll = ScrolledWindow::builder().child(&vbox).build();
    let outer = Box::new(Orientation::Vertical, 0);
    scroll.set_vexpand(true);
    outer.append(&scroll);
    outer.append(&notebook_holder(&notebook));

    // Footer
    let footer = Box::new(Orientation::Horizontal, 10);
    footer.set_margin_top(10);
    footer.set_margin_bottom(10);
    footer.set_margin_end(10);
    footer.set_halign(Align::End);
    let btn_close = Button::with_label("Close");
    let win_clone = window.clone();
    btn_close.connect_clicked(move |_| win_clone.close());
    footer.append(&btn_close);
    outer.append(&footer);

    // Escape closes
    let keys = EventControllerKey::new();
    let win_weak = window.downgrade();
    keys.connect_key_pressed(move |_, key, _, _| {
        if key == gdk::Key::Escape {
            if let Some(win) = win_weak.upgrade() {
                win.close();
            }
            glib::Propagation::Stop
        } else {
            glib::Propagation::Proceed
        }
    });
    window.add_controller(keys);

    let s_close = shell.state.clone();
    let table_area = shell.table_area.clone();
    window.connect_close_request(move |_| {
        s_close.borrow_mut().close_detail();
        table_area.queue_draw();
        glib::Propagation::Proceed
    });

    window.set_child(Some(&outer));
    window.present();
}

fn notebook_holder(notebook: &Notebook) -> Box {
    let holder = Box::new(Orientation::Vertical, 0);
    holder.set_margin_start(16);
    holder.set_margin_end(16);
    holder.set_size_request(-1, 320);
    holder.append(notebook);
    holder
}

fn header(e: &NormalizedElement) -> Box {
    let hbox = Box::new(Orientation::Horizontal, 12);

    let titles = Box::new(Orientation::Vertical, 2);
    titles.set_hexpand(true);
    let title = Label::new(None);
    title.set_markup(&format!(
        "<span size='x-large' weight='bold'>{}</span>",
        glib::markup_escape_text(&report::title(e))
    ));
    title.set_halign(Align::Start);
    let subtitle = Label::new(Some(&report::subtitle(e)));
    subtitle.set_halign(Align::Start);
    subtitle.add_css_class("dim-label");
    titles.append(&title);
    titles.append(&subtitle);
    hbox.append(&titles);

    if !e.category.is_empty() {
        let badge = Label::new(None);
        badge.set_markup(&format!(
            "<span background='{}' foreground='#1F2937'> {} </span>",
            CategoryStyle::for_category(&e.category).hex(),
            glib::markup_escape_text(&e.category)
        ));
        badge.set_valign(Align::Center);
        hbox.append(&badge);
    }

    hbox
}

fn section_frame(section: &report::Section) -> Frame {
    let frame = Frame::new(Some(section.title));
    let grid = Grid::new();
    grid.set_row_spacing(4);
    grid.set_column_spacing(10);
    grid.set_margin_top(8);
    grid.set_margin_bottom(8);
    grid.set_margin_start(8);
    grid.set_margin_end(8);

    for (row, (label, value)) in section.rows.iter().enumerate() {
        let l = Label::new(Some(&format!("{}:", label)));
        l.set_halign(Align::Start);
        l.add_css_class("dim-label");
        let v = Label::new(Some(value));
        v.set_halign(Align::Start);
        v.set_wrap(true);
        v.set_selectable(true);
        grid.attach(&l, 0, row as i32, 1, 1);
        grid.attach(&v, 1, row as i32, 1, 1);
    }

    frame.set_child(Some(&grid));
    frame
}

// --- Images tab ---

fn images_page(
    state: &Rc<RefCell<AppState>>,
    images: &elemview::io::ElementImages,
    ticket: Ticket,
) -> Box {
    let hbox = Box::new(Orientation::Horizontal, 16);
    hbox.set_margin_top(12);
    hbox.set_margin_bottom(12);
    hbox.set_halign(Align::Center);
    hbox.append(&image_slot("Bohr Model", images.bohr.clone(), state, ticket));
    hbox.append(&image_slot("Element Image", images.element.clone(), state, ticket));
    hbox
}

/// A titled picture that shows a spinner until the load settles, then the
/// image or a placeholder icon.
fn image_slot(
    title: &str,
    url: Option<String>,
    state: &Rc<RefCell<AppState>>,
    ticket: Ticket,
) -> Box {
    let vbox = Box::new(Orientation::Vertical, 6);
    let heading = Label::new(None);
    heading.set_markup(&format!("<b>{}</b>", title));
    vbox.append(&heading);

    let stack = Stack::new();
    stack.set_size_request(IMAGE_SIZE, IMAGE_SIZE);

    let spinner = Spinner::new();
    spinner.set_spinning(true);
    spinner.set_halign(Align::Center);
    spinner.set_valign(Align::Center);
    stack.add_named(&spinner, Some("loading"));

    let picture = Picture::new();
    picture.set_can_shrink(true);
    stack.add_named(&picture, Some("picture"));

    let missing = Image::from_icon_name("image-missing");
    missing.set_pixel_size(96);
    stack.add_named(&missing, Some("missing"));

    vbox.append(&stack);

    match url {
        Some(url) => load_image(stack, picture, url, state.clone(), ticket),
        None => stack.set_visible_child_name("missing"),
    }
    vbox
}

fn load_image(
    stack: Stack,
    picture: Picture,
    url: String,
    state: Rc<RefCell<AppState>>,
    ticket: Ticket,
) {
    stack.set_visible_child_name("loading");
    glib::MainContext::default().spawn_local(async move {
        let result = gio::File::for_uri(&url).load_contents_future().await;

        if !state.borrow().accepts_images(&ticket) {
            log::debug!("Dropping stale image for element {}", ticket.atomic_number);
            return;
        }

        let texture = result.and_then(|(bytes, _etag)| {
            gdk4::Texture::from_bytes(&glib::Bytes::from_owned(bytes.to_vec()))
        });
        match texture {
            Ok(texture) => {
                picture.set_paintable(Some(&texture));
                stack.set_visible_child_name("picture");
            }
            Err(e) => {
                log::warn!("Could not load image {}: {}", url, e);
                stack.set_visible_child_name("missing");
            }
        }
    });
}

// --- Spectrum tab ---

fn spectrum_page(e: &NormalizedElement, lines: Vec<SpectralLine>, width: i32, height: i32) -> Box {
    let vbox = Box::new(Orientation::Vertical, 8);
    vbox.set_margin_top(12);
    vbox.set_margin_bottom(12);
    vbox.set_margin_start(12);
    vbox.set_margin_end(12);

    let known = spectrum::has_known_spectrum(&e.symbol);

    let chart = DrawingArea::new();
    chart.set_content_width(width);
    chart.set_content_height(height);
    chart.set_halign(Align::Center);
    let chart_lines = lines.clone();
    chart.set_draw_func(move |_, cr, w, h| {
        if let Err(err) = render_spectrum(cr, &chart_lines, w as f64, h as f64) {
            log::warn!("Spectrum draw failed: {}", err);
        }
    });
    vbox.append(&chart);

    let heading = Label::new(None);
    heading.set_markup(if known {
        "<b>Notable spectral lines</b>"
    } else {
        "<b>Simulated spectral lines</b>"
    });
    heading.set_halign(Align::Start);
    vbox.append(&heading);

    for line in &lines {
        vbox.append(&line_row(line));
    }

    let note = if known {
        Label::new(Some(&format!(
            "Based on known emission spectra for {}.",
            e.name
        )))
    } else {
        Label::new(Some(
            "Note: This is simulated spectral data for educational purposes only.",
        ))
    };
    note.set_halign(Align::Start);
    note.set_wrap(true);
    note.add_css_class("dim-label");
    vbox.append(&note);

    let export = Button::with_label("Export Spectrum...");
    export.set_halign(Align::End);
    export.set_action_name(Some("app.export_spectrum"));
    vbox.append(&export);

    vbox
}

fn line_row(line: &SpectralLine) -> Box {
    let hbox = Box::new(Orientation::Horizontal, 8);

    let (r, g, b) = wavelength_to_rgb(line.wavelength);
    let swatch = DrawingArea::new();
    swatch.set_content_width(16);
    swatch.set_content_height(16);
    swatch.set_valign(Align::Center);
    swatch.set_draw_func(move |_, cr, w, h| {
        cr.set_source_rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
        cr.rectangle(0.0, 0.0, w as f64, h as f64);
        let _ = cr.fill();
    });
    hbox.append(&swatch);

    let label = Label::new(Some(&line.label()));
    label.set_width_chars(22);
    label.set_xalign(0.0);
    hbox.append(&label);

    let bar = LevelBar::for_interval(0.0, 1.0);
    bar.set_value(line.intensity);
    bar.set_hexpand(true);
    bar.set_valign(Align::Center);
    hbox.append(&bar);

    hbox
}
