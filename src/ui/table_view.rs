// src/ui/table_view.rs

use elemview::rendering::table;
use elemview::state::AppState;
use gtk4::prelude::*;
use gtk4::{DrawingArea, GestureClick};
use std::cell::RefCell;
use std::rc::Rc;

/// Periodic-table page. Clicking a cell opens its detail window through
/// `app.open_element`.
pub fn build(state: Rc<RefCell<AppState>>) -> DrawingArea {
    let da = DrawingArea::new();
    da.set_content_width(900);
    da.set_content_height(560);
    da.set_hexpand(true);
    da.set_vexpand(true);

    let s = state.clone();
    da.set_draw_func(move |_, cr, w, h| {
        let st = s.borrow();
        if let Err(e) = table::paint(cr, &st.dataset.elements, st.selected, w as f64, h as f64) {
            log::warn!("Periodic table draw failed: {}", e);
        }
    });

    let click = GestureClick::new();
    let da_weak = da.downgrade();
    click.connect_released(move |_, _, x, y| {
        let Some(da) = da_weak.upgrade() else { return };
        let hit = table::hit_test(x, y, da.width() as f64, da.height() as f64);
        let Some(n) = hit else { return };
        if state.borrow().dataset.by_number(n).is_none() {
            log::debug!("Cell {} has no element in the loaded dataset", n);
            return;
        }
        if let Err(e) = da.activate_action("app.open_element", Some(&n.to_variant())) {
            log::error!("Could not open element {}: {}", n, e);
        }
    });
    da.add_controller(click);

    da
}
