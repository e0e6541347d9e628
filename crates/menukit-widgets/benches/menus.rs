//! Benchmarks for per-frame menu work.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use menukit_core::{Color, Point};
use menukit_test::{RecordingSurface, StubFontLoader};
use menukit_widgets::{HorizontalMenu, VerticalMenu};

const LABELS: [&str; 8] = [
    "File", "Edit", "View", "Insert", "Format", "Tools", "Window", "Help",
];

fn bench_horizontal_frame(c: &mut Criterion) {
    let mut fonts = StubFontLoader::new();
    let mut menu = HorizontalMenu::new(200.0, 40.0, 5.0, Color::WHITE, Color::BLACK, &mut fonts)
        .expect("stub font");
    for label in LABELS {
        menu.add_text_item(label);
    }
    let mut surface = RecordingSurface::new();
    menu.static_display(&mut surface);
    let target = menu.item_bounds(&surface)[5];
    surface.move_pointer_into(target);

    c.bench_function("horizontal_hover_display", |b| {
        b.iter(|| {
            surface.clear();
            menu.handle_hover(&surface);
            menu.static_display(&mut surface);
            black_box(menu.selected_index())
        })
    });
}

fn bench_vertical_frame(c: &mut Criterion) {
    let mut fonts = StubFontLoader::new();
    let mut menu = VerticalMenu::new(150.0, 40.0, 5.0, Color::WHITE, Color::BLACK, &mut fonts)
        .expect("stub font");
    for label in LABELS {
        menu.add_item(label);
    }
    let mut surface = RecordingSurface::new();
    let origin = Point::new(10.0, 10.0);
    menu.display(&mut surface, origin);
    let target = menu.item_bounds(&surface)[7];
    surface.move_pointer_into(target);

    c.bench_function("vertical_hover_display", |b| {
        b.iter(|| {
            surface.clear();
            menu.handle_input(&surface);
            menu.display(&mut surface, black_box(origin));
            black_box(menu.selected_index())
        })
    });
}

criterion_group!(benches, bench_horizontal_frame, bench_vertical_frame);
criterion_main!(benches);
