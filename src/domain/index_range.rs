/// ソート済みファイルリストに対する両端を含むインデックス範囲。
///
/// 負の値は末尾から数えます (`-1` が最後の要素)。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl IndexRange {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// 範囲が指定されていない (全件を対象とする) かどうか。
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `items` のうち範囲内の部分スライスを返します。
    ///
    /// 範囲外の指定や開始が終了より後ろの指定では空スライスを返し、パニックしません。
    /// 終了に負数を指定した場合も末尾から数えた要素までを含みます。
    /// 単純に `end + 1` を排他的な上限として使う方式と違い、`end = -1` でも空になりません。
    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as i64;
        let resolve = |i: i64| if i < 0 { len.saturating_add(i) } else { i };

        let start = self.start.map(resolve).unwrap_or(0).max(0);
        // 終了は含むので +1 した排他的な上限に変換する
        let end = self.end.map(|e| resolve(e).saturating_add(1)).unwrap_or(len).min(len);

        if start >= end {
            return &[];
        }
        &items[start as usize..end as usize]
    }
}
