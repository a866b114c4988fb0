use std::fs;
use std::path::PathBuf;

use canova::engine::resources::{TextureLoader, TextureTable, load_image};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("canova-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

fn write_png(path: &PathBuf) {
    image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]))
        .save(path)
        .expect("png written");
}

#[test]
fn test_missing_file_names_path_in_error() {
    let mut table = TextureTable::new(egui::Context::default());
    let path = scratch_dir("missing").join("nowhere.png");

    let err = table
        .load_texture("player", &path)
        .expect_err("missing file is an error");

    assert!(format!("{err:#}").contains("nowhere.png"), "{err:#}");
    assert_eq!(table.texture_count(), 0);
    assert_eq!(table.id("player"), None);
}

#[test]
fn test_png_is_decoded_and_registered() {
    let dir = scratch_dir("decode");
    let path = dir.join("red.png");
    write_png(&path);

    let image = load_image(&path).expect("png decodes");
    assert_eq!(image.size, [2, 2]);
    assert_eq!(image.pixels[0], egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255));

    let mut table = TextureTable::new(egui::Context::default());
    let id = table.load_texture("red", &path).expect("texture loads");

    assert_eq!(table.id("red"), Some(id));
    assert!(matches!(table.egui_id(id), Some(egui::TextureId::Managed(_))));
    assert_eq!(table.texture_count(), 1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_same_name_reuses_texture_without_reading_disk() {
    let dir = scratch_dir("reuse");
    let path = dir.join("red.png");
    write_png(&path);

    let mut table = TextureTable::new(egui::Context::default());
    let first = table.load_texture("red", &path).expect("texture loads");
    let egui_first = table.egui_id(first);

    // A second decode would fail now that the file is gone.
    fs::remove_file(&path).expect("png removed");
    let second = table.load_texture("red", &path).expect("name already registered");

    assert_eq!(first, second);
    assert_eq!(table.egui_id(second), egui_first);
    assert_eq!(table.texture_count(), 1);

    let other = table.load_texture("blue", &path);
    assert!(other.is_err(), "a new name still reads the disk");
    assert_eq!(table.texture_count(), 1);

    fs::remove_dir_all(&dir).ok();
}
