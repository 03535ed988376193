//! Drive the terminal front-end with key events and check what it renders

use std::time::{Duration, Instant};

use super::common::fixtures::{numbered_store, seeded_store};
use super::common::terminal::render_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orgdir::ui::InputMode;
use orgdir::{App, Config};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_initial_screen() {
    let (_slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);

    let screen = render_app(&mut app, 120, 20);
    assert!(screen.contains("Найти по ФИО..."));
    assert!(screen.contains("Название"));
    assert!(screen.contains("ФИО директора"));
    assert!(screen.contains("Номер телефона"));
    assert!(screen.contains("Адрес"));
    assert!(screen.contains("Иванов И.И."));
    assert!(screen.contains("г. Санкт-Петербург, пр. Невский, д. 2"));
    assert!(screen.contains("◀  Страница 1 из 1  ▶"));
}

#[test]
fn test_sort_indicator_follows_toggle() {
    let (_slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);

    press(&mut app, KeyCode::Char('1'));
    assert!(render_app(&mut app, 120, 20).contains("Название ▲"));

    press(&mut app, KeyCode::Char('1'));
    assert!(render_app(&mut app, 120, 20).contains("Название ▼"));

    press(&mut app, KeyCode::Char('2'));
    let screen = render_app(&mut app, 120, 20);
    assert!(screen.contains("ФИО директора ▲"));
    assert!(!screen.contains("Название ▼"));
}

#[test]
fn test_paging_through_twelve_records() {
    let (_slot, store) = numbered_store(12);
    let mut app = App::new(Config::default(), store);

    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    let screen = render_app(&mut app, 120, 20);
    assert!(screen.contains("Страница 3 из 3"));
    assert!(screen.contains("Директор 11"));
    assert!(!screen.contains("Директор 09"));

    press(&mut app, KeyCode::Left);
    assert!(render_app(&mut app, 120, 20).contains("Страница 2 из 3"));
}

#[test]
fn test_debounced_search_filters_table() {
    let (_slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);
    let t0 = Instant::now();

    app.handle_key_event_at(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE), t0);
    for c in "иван".chars() {
        app.handle_key_event_at(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), t0);
    }
    app.tick(t0 + Duration::from_millis(50));
    assert!(render_app(&mut app, 120, 20).contains("Сидоров С.С."));

    app.tick(t0 + Duration::from_millis(200));
    let screen = render_app(&mut app, 120, 20);
    assert!(screen.contains("Иванов И.И."));
    assert!(!screen.contains("Сидоров С.С."));
}

#[test]
fn test_edit_flow_updates_phone() {
    let (slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);
    let id = app.view().selected_record().unwrap().id.clone();

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode(), InputMode::Form);
    assert!(render_app(&mut app, 120, 24).contains("Редактировать организацию"));

    // Phone is the third field
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
    type_text(&mut app, "+7 000 00 00 01");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Table);
    let updated = app.store().get(&id).unwrap();
    assert_eq!(updated.phone, "+7 000 00 00 01");
    assert!(slot.peek(orgdir::data::STORAGE_KEY).unwrap().contains("+7 000 00 00 01"));
}

#[test]
fn test_delete_last_row_on_page_steps_back() {
    let (_slot, store) = numbered_store(6);
    let mut app = App::new(Config::default(), store);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.view().params().page(), 2);

    press(&mut app, KeyCode::Char('x'));
    assert!(render_app(&mut app, 120, 24).contains("Удалить запись?"));
    press(&mut app, KeyCode::Char('y'));

    assert_eq!(app.store().len(), 5);
    assert_eq!(app.view().params().page(), 1);
    assert!(render_app(&mut app, 120, 24).contains("Страница 1 из 1"));
}

#[test]
fn test_add_form_blocks_blank_submit() {
    let (_slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input_mode(), InputMode::Form);
    assert!(render_app(&mut app, 120, 24).contains("Заполните все поля"));
    assert_eq!(app.store().len(), 2);
}

#[test]
fn test_storage_failure_shows_status_and_keeps_rows() {
    let (slot, store) = seeded_store();
    let mut app = App::new(Config::default(), store);
    slot.set_read_only(true);

    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Char('y'));

    let screen = render_app(&mut app, 120, 20);
    assert!(screen.contains("Не удалось сохранить"));
    assert!(screen.contains("Иванов И.И."));
    assert!(screen.contains("Сидоров С.С."));
    assert_eq!(app.input_mode(), InputMode::Table);
}
