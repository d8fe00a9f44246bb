//! Built-in data set used when the store holds no usable records.

use crate::types::bookmark::{Bookmark, Category, IconType};

fn category(id: &str, name: &str, icon_type: IconType) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        icon_type,
    }
}

fn bookmark(id: &str, category_id: &str, name: &str, url: &str, description: &str, icon: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        name: name.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category_id: category_id.to_string(),
    }
}

pub fn default_categories() -> Vec<Category> {
    vec![
        category("tools", "实用工具", IconType::Tools),
        category("media", "影音编辑", IconType::Media),
        category("resources", "资源站点", IconType::Resources),
        category("misc", "其它常用", IconType::Misc),
    ]
}

pub fn default_bookmarks() -> Vec<Bookmark> {
    vec![
        bookmark("1", "tools", "Google", "https://www.google.com", "全球领先的搜索引擎", "https://www.google.com/favicon.ico"),
        bookmark("2", "tools", "DeepL", "https://www.deepl.com", "全世界最准确的文本翻译工具", "https://www.deepl.com/favicon.ico"),
        bookmark("3", "tools", "TinyPNG", "https://tinypng.com", "智能压缩您的 WebP、PNG 和 JPEG 图片", "https://tinypng.com/images/favicon.ico"),
        bookmark("4", "tools", "ProcessOn", "https://www.processon.com", "免费在线流程图思维导图", "https://www.processon.com/favicon.ico"),
        bookmark("5", "media", "Bilibili", "https://www.bilibili.com", "中国领先的年轻人文化社区", "https://www.bilibili.com/favicon.ico"),
        bookmark("6", "media", "Canva 可画", "https://www.canva.cn", "零门槛的在线图形设计平台", "https://www.canva.cn/favicon.ico"),
        bookmark("7", "media", "YouTube", "https://www.youtube.com", "全球最大的视频分享平台", "https://www.youtube.com/favicon.ico"),
        bookmark("8", "media", "剪映", "https://www.capcut.cn", "全能易用的视频编辑工具", "https://lf3-static.bytednsdoc.com/obj/eden-cn/ptp_j_l_jvwzlp/capcut/favicon.ico"),
        bookmark("9", "resources", "Pixabay", "https://pixabay.com", "百万级免费高清图片、素材下载", "https://pixabay.com/favicon-32x32.png"),
        bookmark("10", "resources", "GitHub", "https://github.com", "全球开源代码托管与资源平台", "https://github.githubassets.com/favicons/favicon.svg"),
        bookmark("11", "resources", "iconfont", "https://www.iconfont.cn", "阿里巴巴矢量图标库", "https://gtms04.alicdn.com/tps/i4/TB1_oz6GVXXXXaFXpXXJ6TrIXXX-32-32.ico"),
        bookmark("12", "misc", "知乎", "https://www.zhihu.com", "中文互联网高质量问答社区", "https://static.zhihu.com/heifetz/favicon.ico"),
        bookmark("13", "misc", "豆瓣", "https://www.douban.com", "提供书影音推荐、线下活动、小组等服务", "https://www.douban.com/favicon.ico"),
        bookmark("14", "misc", "京东", "https://www.jd.com", "综合网络零售商，正品保障", "https://www.jd.com/favicon.ico"),
    ]
}
