//! ファイル名に埋め込まれた番号による並べ替え。
//!
//! `img2.png` と `img10.png` を辞書順ではなく番号順 (2 → 10) に並べます。

use std::path::{Path, PathBuf};

/// ファイル名中の最初の連続した数字列を整数として返します。
///
/// 数字を含まない場合は `None`。`u64` に収まらない数字列は `u64::MAX` に飽和します。
pub fn sort_key(file_name: &str) -> Option<u64> {
    let digits: String = file_name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// パスのファイル名部分からソートキーを取り出します。
pub fn path_sort_key(path: &Path) -> Option<u64> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| sort_key(&name))
}

/// ソートキーの昇順に安定ソートします。
///
/// 番号を持たないファイルはすべて末尾に回り、互いの相対順序は保たれます。
pub fn sort_by_sort_key(paths: &mut [PathBuf]) {
    // `None` を末尾にするため (番号なしフラグ, 番号) で比較する
    paths.sort_by_key(|p| match path_sort_key(p) {
        Some(n) => (false, n),
        None => (true, 0),
    });
}
