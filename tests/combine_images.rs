//! 縦連結ワークフローの結合テスト。
//!
//! 一時フォルダにテスト用の画像を書き出し、`combine_images` の結果を検証します。

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use sprite_sheet_tools::combine::{combine_images, CombineRequest};
use sprite_sheet_tools::domain::index_range::IndexRange;
use sprite_sheet_tools::error::AppError;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// --- テスト用ヘルパー関数 ---

fn write_solid(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(dir.join(name))
        .expect("テスト画像の保存に失敗");
}

fn request(input: &Path, output: &Path, start: Option<i64>, end: Option<i64>) -> CombineRequest {
    CombineRequest {
        input_dir: input.to_path_buf(),
        output_file: output.to_path_buf(),
        range: IndexRange::new(start, end),
    }
}

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn stacks_images_in_numeric_order() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_solid(input.path(), "img2.png", 50, 50, [0, 255, 0]);
    write_solid(input.path(), "img10.png", 50, 50, [0, 0, 255]);
    write_solid(input.path(), "img1.png", 50, 50, [255, 0, 0]);
    let out_path = output.path().join("combined.png");

    let summary = combine_images(&request(input.path(), &out_path, None, None), false)
        .expect("連結に失敗");

    assert_eq!(file_names(&summary.combined), vec!["img1.png", "img2.png", "img10.png"]);
    assert!(summary.skipped.is_empty());
    assert_eq!(summary.dimensions, (50, 150));

    let result = image::open(&out_path).unwrap().into_rgb8();
    assert_eq!(result.dimensions(), (50, 150));
    assert_eq!(result.get_pixel(25, 25), &Rgb([255, 0, 0]));
    assert_eq!(result.get_pixel(25, 75), &Rgb([0, 255, 0]));
    assert_eq!(result.get_pixel(25, 125), &Rgb([0, 0, 255]));
}

#[test]
fn mixed_sizes_use_max_width_and_summed_height() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_solid(input.path(), "a1.png", 30, 10, [0, 0, 0]);
    write_solid(input.path(), "a2.bmp", 60, 20, [0, 0, 0]);
    write_solid(input.path(), "a3.png", 10, 5, [0, 0, 0]);
    let out_path = output.path().join("combined.bmp");

    let summary = combine_images(&request(input.path(), &out_path, None, None), false).unwrap();

    assert_eq!(summary.dimensions, (60, 35));
    let result = image::open(&out_path).unwrap().into_rgb8();
    assert_eq!(result.dimensions(), (60, 35));
    // 最初の画像より右側は白
    assert_eq!(result.get_pixel(45, 5), &Rgb([255, 255, 255]));
    assert_eq!(result.get_pixel(45, 15), &Rgb([0, 0, 0]));
}

#[test]
fn range_selects_inclusive_slice_of_sorted_files() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    for i in 0..6u8 {
        write_solid(input.path(), &format!("frame{}.png", i), 4, 2, [i * 40, 0, 0]);
    }
    let out_path = output.path().join("range.png");

    let summary = combine_images(&request(input.path(), &out_path, Some(2), Some(4)), false).unwrap();

    assert_eq!(
        file_names(&summary.combined),
        vec!["frame2.png", "frame3.png", "frame4.png"]
    );
    let result = image::open(&out_path).unwrap().into_rgb8();
    assert_eq!(result.dimensions(), (4, 6));
    assert_eq!(result.get_pixel(0, 0), &Rgb([80, 0, 0]));
    assert_eq!(result.get_pixel(0, 5), &Rgb([160, 0, 0]));
}

#[test]
fn out_of_range_writes_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_solid(input.path(), "img1.png", 4, 4, [0, 0, 0]);
    write_solid(input.path(), "img2.png", 4, 4, [0, 0, 0]);
    let out_path = output.path().join("none.png");

    let err = combine_images(&request(input.path(), &out_path, Some(5), Some(9)), false)
        .unwrap_err();

    assert!(matches!(err, AppError::EmptyRange { available: 2 }));
    assert!(err.is_nothing_to_do());
    assert!(!out_path.exists());
}

#[test]
fn directory_without_images_writes_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("notes.txt"), "not an image").unwrap();
    let out_path = output.path().join("none.png");

    let err = combine_images(&request(input.path(), &out_path, None, None), false).unwrap_err();

    assert!(matches!(err, AppError::NoImagesFound(_)));
    assert!(err.is_nothing_to_do());
    assert!(!out_path.exists());
}

#[test]
fn undecodable_files_are_skipped() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write_solid(input.path(), "img1.png", 8, 8, [1, 2, 3]);
    fs::write(input.path().join("img2.png"), b"broken").unwrap();
    write_solid(input.path(), "img3.png", 8, 8, [4, 5, 6]);
    let out_path = output.path().join("combined.png");

    let summary = combine_images(&request(input.path(), &out_path, None, None), false).unwrap();

    assert_eq!(file_names(&summary.combined), vec!["img1.png", "img3.png"]);
    assert_eq!(file_names(&summary.skipped), vec!["img2.png"]);
    assert_eq!(summary.dimensions, (8, 16));
    assert!(out_path.exists());
}

#[test]
fn all_files_failing_writes_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("img1.png"), b"broken").unwrap();
    fs::write(input.path().join("img2.jpg"), b"also broken").unwrap();
    let out_path = output.path().join("combined.png");

    let err = combine_images(&request(input.path(), &out_path, None, None), false).unwrap_err();

    assert!(matches!(err, AppError::NoValidImages));
    assert!(!out_path.exists());
}

#[test]
fn transparency_is_composited_on_white() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
    img.put_pixel(1, 1, Rgba([0, 0, 0, 0]));
    img.save(input.path().join("sprite1.png")).unwrap();
    let out_path = output.path().join("combined.png");

    combine_images(&request(input.path(), &out_path, None, None), false).unwrap();

    let result = image::open(&out_path).unwrap();
    assert!(!result.color().has_alpha());
    let result = result.into_rgb8();
    assert_eq!(result.get_pixel(0, 0), &Rgb([0, 0, 0]));
    assert_eq!(result.get_pixel(1, 1), &Rgb([255, 255, 255]));
}

#[test]
fn missing_input_directory_is_an_error() {
    let output = tempdir().unwrap();
    let out_path = output.path().join("combined.png");

    let err = combine_images(
        &request(Path::new("no_such_input_directory"), &out_path, None, None),
        false,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Path(_)));
    assert!(!err.is_nothing_to_do());
}
