//! The fixed datasets
//!
//! Curated record tables compiled into the binary. Order is curated order
//! and is what filtering preserves; entries are never mutated.

use crate::catalog::record::{Dataset, Record};

/// Japanese proverbs (ことわざ) with readings and English meanings.
pub static JAPANESE_PROVERBS: [Record; 25] = [
    Record {
        text: "石の上にも三年",
        reading: Some("いしのうえにもさんねん"),
        meaning: "Cold stones warm after three years: patient effort eventually pays off.",
        themes: &["perseverance", "career", "study"],
        usage_hint: "Use when encouraging someone to keep grinding even when results feel slow.",
        origin: None,
    },
    Record {
        text: "案ずるより産むが易し",
        reading: Some("あんずるよりうむがやすし"),
        meaning: "Doing is easier than worrying: action is simpler than endless anxiety.",
        themes: &["anxiety", "decisions", "projects"],
        usage_hint: "Good for someone overthinking a decision or launch.",
        origin: None,
    },
    Record {
        text: "二兎を追う者は一兎をも得ず",
        reading: Some("にとをおうものはいっとをもえず"),
        meaning: "Chasing two rabbits nets none: split focus fails both goals.",
        themes: &["prioritization", "work", "study"],
        usage_hint: "Use when someone is juggling too many tasks at once.",
        origin: None,
    },
    Record {
        text: "覆水盆に返らず",
        reading: Some("ふくすいぼんにかえらず"),
        meaning: "Spilt water never returns to the bowl: irreversible actions stay irreversible.",
        themes: &["regret", "relationships", "apology"],
        usage_hint: "For regret or when someone wishes to undo a mistake.",
        origin: None,
    },
    Record {
        text: "七転び八起き",
        reading: Some("ななころびやおき"),
        meaning: "Fall seven times, rise eight: resilience is more important than perfection.",
        themes: &["resilience", "motivation", "health"],
        usage_hint: "When someone needs morale after repeated setbacks.",
        origin: None,
    },
    Record {
        text: "急がば回れ",
        reading: Some("いそがばまわれ"),
        meaning: "When in a hurry, take the long way around: rushing causes delays.",
        themes: &["quality", "deadlines", "planning"],
        usage_hint: "Best for people tempted to cut critical corners.",
        origin: None,
    },
    Record {
        text: "初心忘るべからず",
        reading: Some("しょしんわするべからず"),
        meaning: "Never forget your beginner's mindset or original intention.",
        themes: &["growth", "craft", "leadership"],
        usage_hint: "Helps when someone drifts away from their motivations.",
        origin: None,
    },
    Record {
        text: "情けは人の為ならず",
        reading: Some("なさけはひとのためならず"),
        meaning: "Kindness returns to the giver eventually.",
        themes: &["relationships", "team", "community"],
        usage_hint: "Use for collaboration or favor fatigue.",
        origin: None,
    },
    Record {
        text: "虎穴に入らずんば虎子を得ず",
        reading: Some("こけつにいらずんばこじをえず"),
        meaning: "No tiger cubs without entering the tiger's den: rewards need courage.",
        themes: &["risk", "entrepreneurship", "career"],
        usage_hint: "For someone afraid to take a bold step.",
        origin: None,
    },
    Record {
        text: "朱に交われば赤くなる",
        reading: Some("しゅにまじわればあかくなる"),
        meaning: "People become like the company they keep.",
        themes: &["environment", "habits", "relationships"],
        usage_hint: "Use when warning about influence of peers or co-workers.",
        origin: None,
    },
    Record {
        text: "石橋を叩いて渡る",
        reading: Some("いしばしをたたいてわたる"),
        meaning: "Tap the stone bridge before crossing: double-check before acting.",
        themes: &["risk", "due diligence", "planning"],
        usage_hint: "When caution or verification is the main advice.",
        origin: None,
    },
    Record {
        text: "猿も木から落ちる",
        reading: Some("さるもきからおちる"),
        meaning: "Even monkeys fall from trees: experts still make mistakes.",
        themes: &["humility", "failure", "learning"],
        usage_hint: "Use to calm someone who slipped up despite expertise.",
        origin: None,
    },
    Record {
        text: "雨降って地固まる",
        reading: Some("あめふってじかたまる"),
        meaning: "After rain, the ground hardens: conflict can strengthen bonds.",
        themes: &["conflict", "relationships", "team"],
        usage_hint: "Good when smoothing over drama or setbacks.",
        origin: None,
    },
    Record {
        text: "花より団子",
        reading: Some("はなよりだんご"),
        meaning: "Dumplings over flowers: practicality beats aesthetics.",
        themes: &["pragmatism", "budget", "events"],
        usage_hint: "Use when someone must choose usefulness over looks.",
        origin: None,
    },
    Record {
        text: "塵も積もれば山となる",
        reading: Some("ちりもつもればやまとなる"),
        meaning: "Dust piles up into mountains: small efforts accumulate.",
        themes: &["habits", "savings", "practice"],
        usage_hint: "Motivate steady incremental progress.",
        origin: None,
    },
    Record {
        text: "柳に風",
        reading: Some("やなぎにかぜ"),
        meaning: "Wind through a willow: flexibility prevents breakage.",
        themes: &["adaptability", "stress", "negotiation"],
        usage_hint: "Suggest bending instead of snapping during change.",
        origin: None,
    },
    Record {
        text: "腹八分目に医者いらず",
        reading: Some("はらはちぶんめにいしゃいらず"),
        meaning: "Stop eating at eighty percent: moderation keeps you healthy.",
        themes: &["health", "discipline", "balance"],
        usage_hint: "Great for lifestyle or burnout discussions.",
        origin: None,
    },
    Record {
        text: "灯台下暗し",
        reading: Some("とうだいもとくらし"),
        meaning: "It is dark under the lighthouse: you miss what's close by.",
        themes: &["awareness", "investigation", "team"],
        usage_hint: "When the answer is nearby but overlooked.",
        origin: None,
    },
    Record {
        text: "石の上の水も三年",
        reading: Some("いしのうえのみずもさんねん"),
        meaning: "Even water on a stone takes three years: persistence changes anything.",
        themes: &["patience", "habits", "long-term"],
        usage_hint: "Emphasize long-haul dedication.",
        origin: None,
    },
    Record {
        text: "馬の耳に念仏",
        reading: Some("うまのみみにねんぶつ"),
        meaning: "Chanting sutras to a horse: advice ignored falls flat.",
        themes: &["communication", "feedback", "team"],
        usage_hint: "When someone's warnings are being ignored.",
        origin: None,
    },
    Record {
        text: "覆面の下は笑っている",
        reading: Some("ふくめんのしたはわらっている"),
        meaning: "Behind the mask there is a grin: hidden motives exist.",
        themes: &["politics", "office", "trust"],
        usage_hint: "Use for navigating subtle workplace dynamics.",
        origin: None,
    },
    Record {
        text: "泣きっ面に蜂",
        reading: Some("なきっつらにはち"),
        meaning: "Bees sting a crying face: misfortunes pile up.",
        themes: &["bad luck", "resilience", "emotions"],
        usage_hint: "For times when everything goes wrong at once.",
        origin: None,
    },
    Record {
        text: "船頭多くして船山に登る",
        reading: Some("せんどうおおくしてふねやまにのぼる"),
        meaning: "Too many captains steer the boat up a mountain: too many leaders ruin plans.",
        themes: &["leadership", "projects", "alignment"],
        usage_hint: "When collaboration lacks a clear owner.",
        origin: None,
    },
    Record {
        text: "聞くは一時の恥、聞かぬは一生の恥",
        reading: Some("きくはいっときのはじ、きかぬはいっしょうのはじ"),
        meaning: "Asking once is momentary shame; not asking is lifelong shame.",
        themes: &["learning", "mentorship", "courage"],
        usage_hint: "Encourage questions or seeking help.",
        origin: None,
    },
    Record {
        text: "短気は損気",
        reading: Some("たんきはそんき"),
        meaning: "Short temper, short fortune: impatience costs you.",
        themes: &["emotions", "negotiation", "leadership"],
        usage_hint: "Use when cooling someone down.",
        origin: None,
    },
];

/// Proverbs from outside Japan, each tagged with its origin.
pub static GLOBAL_PROVERBS: [Record; 18] = [
    Record {
        text: "When in Rome, do as the Romans do",
        reading: None,
        meaning: "Adapting to local customs prevents friction.",
        themes: &["culture", "travel", "team"],
        usage_hint: "Use when someone must respect an existing process.",
        origin: Some("Italy"),
    },
    Record {
        text: "A stitch in time saves nine",
        reading: None,
        meaning: "Fixing small issues early prevents bigger messes.",
        themes: &["maintenance", "planning", "quality"],
        usage_hint: "Encourage proactive action before things blow up.",
        origin: Some("England"),
    },
    Record {
        text: "The squeaky wheel gets the grease",
        reading: None,
        meaning: "Those who speak up receive attention first.",
        themes: &["advocacy", "priorities", "communication"],
        usage_hint: "Good when nudging someone to ask for support.",
        origin: Some("United States"),
    },
    Record {
        text: "Measure twice, cut once",
        reading: None,
        meaning: "Preparation avoids costly rework.",
        themes: &["craftsmanship", "planning", "quality"],
        usage_hint: "Use for launches or irreversible decisions.",
        origin: Some("Carpentry proverb"),
    },
    Record {
        text: "Empty barrels make the most noise",
        reading: None,
        meaning: "Loud bragging often hides lack of substance.",
        themes: &["ego", "leadership", "focus"],
        usage_hint: "When dealing with performative teammates.",
        origin: Some("Ireland"),
    },
    Record {
        text: "Better an egg today than a hen tomorrow",
        reading: None,
        meaning: "A small sure thing beats a big maybe.",
        themes: &["negotiation", "finance", "risk"],
        usage_hint: "Encourage cashing in guaranteed wins.",
        origin: Some("Spain"),
    },
    Record {
        text: "He who chases two rabbits catches neither",
        reading: None,
        meaning: "Split attention ruins both goals.",
        themes: &["focus", "projects", "strategy"],
        usage_hint: "Parallel to Japanese rabbit proverb; use for prioritization.",
        origin: Some("Russia"),
    },
    Record {
        text: "No bees, no honey; no work, no money",
        reading: None,
        meaning: "Rewards require effort.",
        themes: &["work", "motivation", "finance"],
        usage_hint: "Remind someone that grind precedes payoff.",
        origin: Some("French"),
    },
    Record {
        text: "The best time to plant a tree was twenty years ago. The second best time is now",
        reading: None,
        meaning: "Late action still beats inaction.",
        themes: &["long-term", "habits", "personal growth"],
        usage_hint: "Use when someone regrets procrastinating.",
        origin: Some("Chinese"),
    },
    Record {
        text: "Trust, but verify",
        reading: None,
        meaning: "Believe people, yet confirm the facts.",
        themes: &["governance", "security", "partnerships"],
        usage_hint: "Great for audits or vendor oversight.",
        origin: Some("Russian (popularized in US)"),
    },
    Record {
        text: "Little by little, the bird builds its nest",
        reading: None,
        meaning: "Small consistent steps create big outcomes.",
        themes: &["habits", "learning", "projects"],
        usage_hint: "Motivate incremental work when the goal is huge.",
        origin: Some("Haitian"),
    },
    Record {
        text: "You can't plow a field by turning it over in your mind",
        reading: None,
        meaning: "Thinking alone changes nothing; act.",
        themes: &["procrastination", "action", "projects"],
        usage_hint: "Perfect when analysis paralysis strikes.",
        origin: Some("Ireland"),
    },
    Record {
        text: "Fall seven times, stand up eight",
        reading: None,
        meaning: "Resilience beats perfection.",
        themes: &["perseverance", "motivation", "sports"],
        usage_hint: "Globalized twin to 七転び八起き.",
        origin: Some("Japanese via English"),
    },
    Record {
        text: "Even a fish wouldn't get into trouble if it kept its mouth shut",
        reading: None,
        meaning: "Sometimes silence is safer.",
        themes: &["gossip", "meetings", "risk"],
        usage_hint: "Use when over-sharing causes problems.",
        origin: Some("Polish"),
    },
    Record {
        text: "Smooth seas do not make skillful sailors",
        reading: None,
        meaning: "Challenge is required for mastery.",
        themes: &["growth", "training", "resilience"],
        usage_hint: "Help someone embrace a rough sprint or launch.",
        origin: Some("African"),
    },
    Record {
        text: "If you want to go fast, go alone; if you want to go far, go together",
        reading: None,
        meaning: "Teamwork extends reach even if it slows pace.",
        themes: &["collaboration", "leadership", "strategy"],
        usage_hint: "Use when debating solo vs. team effort.",
        origin: Some("African"),
    },
    Record {
        text: "The camel cannot see its own hump",
        reading: None,
        meaning: "People miss their own flaws.",
        themes: &["feedback", "self-awareness", "mentorship"],
        usage_hint: "For coaching conversations.",
        origin: Some("Arab"),
    },
    Record {
        text: "You reap what you sow",
        reading: None,
        meaning: "Consequences match the effort invested.",
        themes: &["accountability", "karma", "habits"],
        usage_hint: "Classic warning that shortcuts come back around.",
        origin: Some("Biblical"),
    },
];

/// Four-character idioms (四字熟語) with readings and Japanese meanings.
pub static YOJIJUKUGO: [Record; 26] = [
    Record {
        text: "起死回生",
        reading: Some("きしかいせい"),
        meaning: "一度ダメになった状況を根性で立て直すこと。",
        themes: &["recovery", "motivation", "projects"],
        usage_hint: "大逆転やV字回復を狙う時に。",
        origin: None,
    },
    Record {
        text: "四面楚歌",
        reading: Some("しめんそか"),
        meaning: "周囲が全部敵で味方ゼロの孤立状態。",
        themes: &["politics", "team", "stress"],
        usage_hint: "孤軍奮闘している相談者向け。",
        origin: None,
    },
    Record {
        text: "臥薪嘗胆",
        reading: Some("がしんしょうたん"),
        meaning: "屈辱を忘れず努力してリベンジを狙うこと。",
        themes: &["career", "revenge", "training"],
        usage_hint: "悔しさを原動力にしている相手へ。",
        origin: None,
    },
    Record {
        text: "電光石火",
        reading: Some("でんこうせっか"),
        meaning: "電撃のように素早く動くさま。",
        themes: &["speed", "decisions", "ops"],
        usage_hint: "判断や行動を急ぎたい時に。",
        origin: None,
    },
    Record {
        text: "暗中模索",
        reading: Some("あんちゅうもさく"),
        meaning: "何も見えない状況で手探りを続けること。",
        themes: &["uncertainty", "product", "research"],
        usage_hint: "方向性を迷っている場面に。",
        origin: None,
    },
    Record {
        text: "粉骨砕身",
        reading: Some("ふんこつさいしん"),
        meaning: "骨を粉にするほど全力を尽くすこと。",
        themes: &["effort", "loyalty", "team"],
        usage_hint: "無茶な頑張りを美談にしたい時。",
        origin: None,
    },
    Record {
        text: "朝令暮改",
        reading: Some("ちょうれいぼかい"),
        meaning: "朝の命令が夕方には変わるほど方針がぐらつくさま。",
        themes: &["management", "chaos", "planning"],
        usage_hint: "上層部の迷走をいじる時に。",
        origin: None,
    },
    Record {
        text: "自業自得",
        reading: Some("じごうじとく"),
        meaning: "自分の行いの結果を自分が受けること。",
        themes: &["accountability", "karma", "discipline"],
        usage_hint: "自爆した人へ辛口コメントする時。",
        origin: None,
    },
    Record {
        text: "有言実行",
        reading: Some("ゆうげんじっこう"),
        meaning: "口にしたことをきっちり実行するさま。",
        themes: &["integrity", "leadership", "habits"],
        usage_hint: "やると言った人を追い込むとき。",
        origin: None,
    },
    Record {
        text: "一石二鳥",
        reading: Some("いっせきにちょう"),
        meaning: "一つの行動で二つの成果を得ること。",
        themes: &["efficiency", "strategy", "tradeoff"],
        usage_hint: "一挙両得を狙う相談に。",
        origin: None,
    },
    Record {
        text: "右往左往",
        reading: Some("うおうさおう"),
        meaning: "混乱して行ったり来たりするさま。",
        themes: &["panic", "ops", "communication"],
        usage_hint: "現場がバタついている話題に。",
        origin: None,
    },
    Record {
        text: "単刀直入",
        reading: Some("たんとうちょくにゅう"),
        meaning: "遠回しにせず核心をズバッと言うこと。",
        themes: &["communication", "feedback", "leadership"],
        usage_hint: "はっきり物を言いたい人向け。",
        origin: None,
    },
    Record {
        text: "泰然自若",
        reading: Some("たいぜんじじゃく"),
        meaning: "大物のように落ち着き払っているさま。",
        themes: &["mindset", "stress", "presence"],
        usage_hint: "慌てない姿勢をすすめる時。",
        origin: None,
    },
    Record {
        text: "以心伝心",
        reading: Some("いしんでんしん"),
        meaning: "言葉がなくても心が伝わること。",
        themes: &["team", "relationships", "collaboration"],
        usage_hint: "空気で察しろ案件に。",
        origin: None,
    },
    Record {
        text: "適材適所",
        reading: Some("てきざいてきしょ"),
        meaning: "才能に合わせて役割を割り振ること。",
        themes: &["management", "hiring", "team"],
        usage_hint: "人員配置の話で使いやすい。",
        origin: None,
    },
    Record {
        text: "公私混同",
        reading: Some("こうしこんどう"),
        meaning: "公的な事と私事を混ぜてしまうこと。",
        themes: &["ethics", "leadership", "governance"],
        usage_hint: "利害がぐちゃぐちゃな人向け。",
        origin: None,
    },
    Record {
        text: "自由奔放",
        reading: Some("じゆうほんぽう"),
        meaning: "好き勝手に振る舞うさま。",
        themes: &["creativity", "culture", "personality"],
        usage_hint: "縛られたくない人をヨイショする時。",
        origin: None,
    },
    Record {
        text: "不眠不休",
        reading: Some("ふみんふきゅう"),
        meaning: "眠らず休まず働き続けること。",
        themes: &["burnout", "dedication", "ops"],
        usage_hint: "社畜ノリを自虐するのに便利。",
        origin: None,
    },
    Record {
        text: "面従腹背",
        reading: Some("めんじゅうふくはい"),
        meaning: "表面上は従いながら内心では逆らうこと。",
        themes: &["politics", "compliance", "trust"],
        usage_hint: "上司に従うふりをしている状況に。",
        origin: None,
    },
    Record {
        text: "傍若無人",
        reading: Some("ぼうじゃくぶじん"),
        meaning: "周りの迷惑を無視してやりたい放題するさま。",
        themes: &["ego", "leadership", "conflict"],
        usage_hint: "暴走気味の人をいじる時。",
        origin: None,
    },
    Record {
        text: "付和雷同",
        reading: Some("ふわらいどう"),
        meaning: "自分の意見を持たず周囲に合わせること。",
        themes: &["consensus", "politics", "team"],
        usage_hint: "流されやすいメンバーに皮肉を言う時。",
        origin: None,
    },
    Record {
        text: "異口同音",
        reading: Some("いくどうおん"),
        meaning: "みんなが同じことを口にすること。",
        themes: &["alignment", "team", "culture"],
        usage_hint: "全員一致ムードを強調する話題に。",
        origin: None,
    },
    Record {
        text: "千載一遇",
        reading: Some("せんざいいちぐう"),
        meaning: "千年に一度レベルの貴重なチャンス。",
        themes: &["opportunity", "timing", "risk"],
        usage_hint: "絶好の機会を逃したくない時。",
        origin: None,
    },
    Record {
        text: "心機一転",
        reading: Some("しんきいってん"),
        meaning: "気分を新たにして仕切り直すこと。",
        themes: &["reset", "career", "habits"],
        usage_hint: "再スタートしたい場面に。",
        origin: None,
    },
    Record {
        text: "老若男女",
        reading: Some("ろうにゃくなんにょ"),
        meaning: "老いも若きも男女も。あらゆる人。",
        themes: &["audience", "community", "diversity"],
        usage_hint: "全方位巻き込み案件で便利。",
        origin: None,
    },
    Record {
        text: "内憂外患",
        reading: Some("ないゆうがいかん"),
        meaning: "内側にも外側にも問題を抱えること。",
        themes: &["strategy", "risk", "politics"],
        usage_hint: "課題だらけの状態を嘆く時。",
        origin: None,
    },
];

/// Japanese proverb dataset descriptor.
pub static JAPANESE_PROVERB_SET: Dataset = Dataset {
    name: "japanese_proverbs",
    text_key: "proverb",
    items_key: "proverbs",
    description: "Return curated Japanese proverbs relevant to a theme",
    records: &JAPANESE_PROVERBS,
};

/// Global proverb dataset descriptor.
pub static GLOBAL_PROVERB_SET: Dataset = Dataset {
    name: "global_proverbs",
    text_key: "proverb",
    items_key: "proverbs",
    description: "Return curated proverbs from around the world relevant to a theme",
    records: &GLOBAL_PROVERBS,
};

/// Four-character idiom dataset descriptor.
pub static YOJIJUKUGO_SET: Dataset = Dataset {
    name: "yojijukugo",
    text_key: "idiom",
    items_key: "idioms",
    description: "Return four-character idioms (四字熟語) that roughly match a theme",
    records: &YOJIJUKUGO,
};

/// Every dataset this crate ships, in registration order.
pub static ALL_DATASETS: [&Dataset; 3] =
    [&JAPANESE_PROVERB_SET, &GLOBAL_PROVERB_SET, &YOJIJUKUGO_SET];
