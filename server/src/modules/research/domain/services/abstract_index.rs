use std::collections::HashMap;

/// 倒排摘要索引：单词 -> 该单词出现的位置（从 0 开始）
pub type InvertedIndex = HashMap<String, Vec<usize>>;

/// 从倒排索引还原摘要文本
///
/// 按位置总数分配槽位，把每个单词放到它出现的每个位置上，再用单个空格连接。
/// 索引缺失时返回 None；位置越界时扩展槽位，空槽位输出为空字符串。
pub fn reconstruct_abstract(index: Option<&InvertedIndex>) -> Option<String> {
    let index = index?;

    let total: usize = index.values().map(Vec::len).sum();
    let mut words: Vec<Option<&str>> = vec![None; total];

    for (word, positions) in index {
        for &pos in positions {
            if pos >= words.len() {
                words.resize(pos + 1, None);
            }
            words[pos] = Some(word.as_str());
        }
    }

    let text = words
        .into_iter()
        .map(|w| w.unwrap_or_default())
        .collect::<Vec<_>>()
        .join(" ");

    Some(text)
}

/// 把文本编码为倒排索引（测试用）
#[cfg(test)]
pub(crate) fn invert_abstract(text: &str) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (pos, word) in text.split(' ').enumerate() {
        index.entry(word.to_string()).or_default().push(pos);
    }
    index
}
