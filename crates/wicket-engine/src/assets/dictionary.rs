//! Built-in glyph pool and idiom list for point-click challenges.
//!
//! Glyphs are common, visually distinct characters that stay legible when
//! rotated. Idioms are four-character set phrases clicked in reading order.

use crate::api::error::ChallengeError;
use crate::core::rng::Rng;

/// Glyph pool for ordered-click challenges.
pub const GLYPHS: &[char] = &[
    '天', '地', '日', '月', '山', '水', '火', '木', '金', '土', '人', '口', '手', '足', '目',
    '耳', '心', '石', '田', '虫', '鱼', '鸟', '云', '雨', '风', '雪', '电', '光', '声', '色',
    '春', '夏', '秋', '冬', '东', '南', '西', '北', '中', '大', '小', '多', '少', '上', '下',
    '左', '右', '前', '后', '高', '低', '长', '短', '远', '近', '新', '旧', '快', '慢', '明',
    '暗',
];

/// Four-character idioms for idiom challenges.
pub const IDIOMS: &[&str] = &[
    "一帆风顺", "万事如意", "四海为家", "五谷丰登", "守株待兔", "画龙点睛", "亡羊补牢",
    "对牛弹琴", "井底之蛙", "刻舟求剑", "自相矛盾", "滥竽充数", "掩耳盗铃", "狐假虎威",
    "叶公好龙", "愚公移山", "熟能生巧", "百发百中", "津津有味", "栩栩如生", "花好月圆",
    "鸟语花香", "风和日丽", "山清水秀", "五光十色", "千军万马", "七上八下", "三心二意",
    "九牛一毛", "十全十美", "水滴石穿", "雪中送炭", "锦上添花", "胸有成竹", "半途而废",
    "拔苗助长", "指鹿为马", "杯弓蛇影", "塞翁失马", "草木皆兵",
];

/// Draw `count` distinct glyphs, in the order they must be clicked.
pub fn random_glyphs(rng: &mut Rng, count: usize) -> Result<Vec<String>, ChallengeError> {
    if count > GLYPHS.len() {
        return Err(ChallengeError::Precondition(
            "glyph count exceeds the dictionary",
        ));
    }
    Ok(rng
        .sample(GLYPHS, count)
        .into_iter()
        .map(String::from)
        .collect())
}

/// One idiom split into glyphs, kept in reading order.
pub fn random_idiom(rng: &mut Rng) -> Vec<String> {
    rng.pick(IDIOMS).chars().map(String::from).collect()
}
