use gtk4::prelude::*;
use gtk4::Box as GtkBox;
use gtk4::{
    glib, Application, ApplicationWindow, Frame, Orientation, Paned, ScrolledWindow, Stack,
    StackSwitcher, TextView,
};
use std::cell::RefCell;
use std::rc::Rc;

mod menu;
mod panels;
mod ui;

use elemview::config::StartView;
use elemview::io;
use elemview::state::AppState;
use elemview::utils::report;
use panels::{FilterPanel, SearchBar};
use ui::list_view::ElementList;
use ui::shell::{Shell, LIST_PAGE, TABLE_PAGE};

fn main() -> glib::ExitCode {
    let app = Application::builder()
        .application_id("org.elemview.elemview")
        .build();

    app.connect_activate(build_ui);
    app.run()
}

fn build_ui(app: &Application) {
    let mut initial_state = AppState::new();
    let config_msg = initial_state.load_config();
    let state = Rc::new(RefCell::new(initial_state));

    let window = ApplicationWindow::builder()
        .application(app)
        .title("ElemView - Chemical Element Explorer")
        .default_width(1200)
        .default_height(800)
        .build();

    // 1. TOP LEVEL: Vertical Box (Menu on top, Main Content below)
    let root_vbox = GtkBox::new(Orientation::Vertical, 0);
    window.set_child(Some(&root_vbox));

    // Console
    let info_frame = Frame::new(None);
    let console_view = TextView::builder()
        .editable(false).cursor_visible(false).monospace(true)
        .left_margin(10).right_margin(10).top_margin(10).bottom_margin(10)
        .build();
    let scroll_win = ScrolledWindow::builder()
        .min_content_height(120)
        .child(&console_view)
        .build();
    info_frame.set_child(Some(&scroll_win));

    if let Err(e) = ui::logger::init(&console_view, log::LevelFilter::Info) {
        eprintln!("Logger already installed: {}", e);
    }
    log::info!("{}", config_msg);

    // 2. PAGES: element list and periodic table
    let search = Rc::new(SearchBar::new());
    let filters = Rc::new(FilterPanel::new());
    let list = Rc::new(ElementList::new());
    let table_area = ui::table_view::build(state.clone());

    let stack = Stack::new();
    stack.set_vexpand(true);
    stack.add_titled(&list.container, Some(LIST_PAGE), "Element List");
    stack.add_titled(&table_area, Some(TABLE_PAGE), "Periodic Table");

    let shell = Shell {
        window: window.clone(),
        state: state.clone(),
        stack: stack.clone(),
        search: search.clone(),
        filters: filters.clone(),
        list,
        table_area,
    };
    search.connect(&shell);
    filters.connect(&shell);

    // Keep the state in step when the user clicks the switcher
    let s_view = state.clone();
    stack.connect_visible_child_name_notify(move |st| {
        let view = match st.visible_child_name().as_deref() {
            Some(TABLE_PAGE) => StartView::Table,
            _ => StartView::List,
        };
        if let Ok(mut s) = s_view.try_borrow_mut() {
            s.view = view;
        }
    });

    // 3. Menu Bar
    let menu_bar = menu::build_menu_and_actions(app, &shell);

    // Toolbar: search + page switcher
    let toolbar = GtkBox::new(Orientation::Horizontal, 12);
    toolbar.set_margin_top(8);
    toolbar.set_margin_bottom(8);
    toolbar.set_margin_start(12);
    toolbar.set_margin_end(12);
    toolbar.append(&search.entry);
    let switcher = StackSwitcher::new();
    switcher.set_stack(Some(&stack));
    toolbar.append(&switcher);

    let content = GtkBox::new(Orientation::Vertical, 6);
    content.append(&toolbar);
    content.append(&filters.container);
    content.append(&stack);

    let paned = Paned::new(Orientation::Vertical);
    paned.set_start_child(Some(&content));
    paned.set_end_child(Some(&info_frame));
    paned.set_resize_end_child(false);
    paned.set_shrink_end_child(true);
    paned.set_vexpand(true);

    // Assemble Root
    root_vbox.append(&menu_bar);
    root_vbox.append(&paned);

    // --- Load Data ---
    let configured = state.borrow().config.dataset_path.clone();
    match io::load_dataset(configured.as_deref()) {
        Ok((dataset, path)) => {
            let source = path.to_string_lossy().to_string();
            log::info!("{}", report::dataset_summary(&dataset.elements, &source));
            state.borrow_mut().set_dataset(dataset, &source);
        }
        Err(e) => log::error!("Could not load element data: {}", e),
    }

    let start_view = state.borrow().config.start_view;
    shell.show_view(start_view);
    shell.refresh_all();

    window.present();
}
