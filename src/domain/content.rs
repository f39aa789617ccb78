//! Static page content: FAQ, precautions, feature cards, download formats and
//! the ranking-site catalogue.
//!
//! None of this is persisted. Pages read it directly or through
//! [`crate::application::services::SiteService`].

use crate::domain::entities::SiteRecord;

/// A question and its answer.
#[derive(Debug, Clone, Copy)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// A risk users should keep in mind when using ranking sites.
#[derive(Debug, Clone, Copy)]
pub struct Precaution {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// One of the "why choose us" cards at the bottom of the home page.
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub tint: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Twitter動画をダウンロードするのは合法ですか？",
        answer: "個人的な使用目的であれば、一般的に問題ありません。ただし、著作権で保護されたコンテンツの場合、権利者の許可なく再配布することは違法です。常に著作権を尊重し、適切な使用を心がけてください。",
    },
    FaqEntry {
        question: "どのような動画形式でダウンロードできますか？",
        answer: "通常、MP4形式で複数の画質（360p、480p、720p、1080p）でダウンロード可能です。利用可能な画質は元の動画によって異なります。",
    },
    FaqEntry {
        question: "ダウンロードした動画が再生されません",
        answer: "ダウンロードが完了していない可能性があります。また、使用しているメディアプレーヤーがその形式に対応していない場合があります。VLCメディアプレーヤーなどの汎用プレーヤーを使用してみてください。",
    },
    FaqEntry {
        question: "プライベートアカウントの動画もダウンロードできますか？",
        answer: "いいえ、プライベートアカウントの動画はダウンロードできません。公開されている動画のみダウンロード可能です。",
    },
    FaqEntry {
        question: "ダウンロードに時間制限はありますか？",
        answer: "通常、1日あたりのダウンロード数に制限を設けている場合があります。大量のダウンロードを行う場合は、時間を空けて実行してください。",
    },
    FaqEntry {
        question: "モバイルデバイスでもダウンロードできますか？",
        answer: "はい、スマートフォンやタブレットからもダウンロード可能です。ただし、デバイスによってはダウンロード先の指定に制限がある場合があります。",
    },
];

pub const PRECAUTIONS: &[Precaution] = &[
    Precaution {
        icon: "⚠️",
        title: "著作権侵害",
        content: "Twitter動画の中には著作権で守られているものがたくさんあります。作者の許可なしにダウンロードして使うのは法律違反になっちゃいます。ダウンロードする前に、その動画が本当に大丈夫かどうか確認してくださいね。怪しいと思ったらやめておきましょう。",
    },
    Precaution {
        icon: "🦠",
        title: "ウイルス感染",
        content: "悪質なサイトでは、ウイルスが仕込まれた動画が配信されることがあります。そんな動画を再生すると、スマホやパソコンがウイルスに感染して、大切な個人情報が盗まれたり、システムが壊れたりする危険性があります。信頼できるサイトだけを使って、セキュリティソフトも最新版にしておきましょう。",
    },
    Precaution {
        icon: "🔞",
        title: "成人向けコンテンツ",
        content: "Twitter動画ランキングサイトには、ちょっと刺激的な内容や成人向けの動画が多く含まれています。大人向けの広告もよく表示されます。なので、未成年の方にはおすすめできません。ご注意ください。",
    },
    Precaution {
        icon: "🕵️",
        title: "プライバシー侵害",
        content: "サイトによっては、あなたがどんな動画を見たか、どんな情報を入力したかを密かに記録している場合があります。それが悪用される可能性もゼロではありません。利用する前に、プライバシーポリシーをしっかり読んで、安心できるサイトかどうか確認しましょう。",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        tint: "blue",
        title: "高速ダウンロード",
        description: "最新技術により、高速でスムーズなダウンロードを実現",
    },
    Feature {
        icon: "🔒",
        tint: "green",
        title: "安全なサービス",
        description: "プライバシーを保護し、安全にご利用いただけます",
    },
    Feature {
        icon: "📊",
        tint: "purple",
        title: "人気ランキング",
        description: "トレンドの動画を確認して、話題のコンテンツを発見",
    },
];

/// A quality option offered by the simulated download form.
#[derive(Debug, Clone, Copy)]
pub struct FormatOption {
    pub quality: &'static str,
    pub size: &'static str,
    pub label: &'static str,
    pub tint: &'static str,
}

/// Fixed options shown after a valid URL is submitted. Their links go nowhere.
pub const FORMAT_OPTIONS: &[FormatOption] = &[
    FormatOption {
        quality: "720p",
        size: "15.2 MB",
        label: "HD",
        tint: "blue",
    },
    FormatOption {
        quality: "480p",
        size: "8.7 MB",
        label: "標準",
        tint: "green",
    },
    FormatOption {
        quality: "360p",
        size: "5.3 MB",
        label: "軽量",
        tint: "gray",
    },
];

struct SiteSeed {
    rank: u32,
    title: &'static str,
    url: &'static str,
    description: &'static str,
    realtime_url: Option<&'static str>,
    notice: Option<&'static str>,
    highlights: [&'static str; 2],
}

const SITES: &[SiteSeed] = &[
    SiteSeed {
        rank: 1,
        title: "TWIVIDEO",
        url: "https://twivideo.net/?ranking",
        description: "「TWIVIDEO」は24時間、3日間と1週間のTwitter保存ランキングをまとめているサイト。直接動画やGIFをダウンロード可能。",
        realtime_url: Some("https://twivideo.net/?realtime"),
        notice: None,
        highlights: ["24時間・3日・1週間", "GIF対応"],
    },
    SiteSeed {
        rank: 2,
        title: "TWIIGLE",
        url: "https://twiigle.com/",
        description: "「TWIIGLE」は24時間～1年間の幅広い期間のランキングを提供。「急上昇」「リアタイ」「裏垢」などの分類も充実。",
        realtime_url: Some("https://twiigle.com/realtime.html"),
        notice: None,
        highlights: ["最大1年間", "豊富な分類"],
    },
    SiteSeed {
        rank: 3,
        title: "ssstwitter",
        url: "https://ssstwitter.com/download-twitter-mp3",
        description: "一つの動画をダウンロードしたり、TwitterビデオをMP3に変換したりして、その使いやすさを確認できます。",
        realtime_url: None,
        notice: None,
        highlights: ["動画ダウンロード", "MP3変換機能"],
    },
    SiteSeed {
        rank: 4,
        title: "TwiHub2（ツイハバ）",
        url: "https://twihub.net/",
        description: "「TwiHub2」は24時間、3日間、1週間のランキングに加え、殿堂入り・過去・お気に入りランキングも提供。",
        realtime_url: Some("https://twihub.net/?type=realtime"),
        notice: Some("注意：クリックすると常に広告が表示され、そのまま閉じることができます"),
        highlights: ["24時間・3日・1週間", "殿堂入りランキング"],
    },
    SiteSeed {
        rank: 6,
        title: "Twihozon",
        url: "https://www.twihozon.com/",
        description: "「Twihozon」はランキング確認と動画保存の両方に対応。Mac、Windows、Android、iPhoneなどすべての端末で利用可能。",
        realtime_url: None,
        notice: None,
        highlights: ["24時間・1週間・1ヶ月", "保存機能付き"],
    },
    SiteSeed {
        rank: 10,
        title: "Twitter Video Downloader",
        url: "https://twittervideodownloader.com/",
        description: "TwitterからMP4形式で動画をダウンロードし、高画質フォーマットの選択も提供します。",
        realtime_url: None,
        notice: None,
        highlights: ["MP4ダウンロード", "高画質対応"],
    },
];

/// Returns the ranking-site catalogue ordered by rank.
pub fn ranking_sites() -> Vec<SiteRecord> {
    SITES
        .iter()
        .zip(1..)
        .map(|(seed, id)| SiteRecord {
            id,
            rank: seed.rank,
            url: seed.url.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            realtime_url: seed.realtime_url.map(str::to_string),
            notice: seed.notice.map(str::to_string),
            highlights: seed.highlights.map(str::to_string),
        })
        .collect()
}
