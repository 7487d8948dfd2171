//! 内置技术签名库
//! 纯数据表：(名称, 展示图标, 签名正则列表)，声明顺序即输出顺序
//! 签名偏向召回：通用子串（如 webpack-runtime）带来的误报可以接受

use super::model::LibraryRule;

type SignatureEntry = (&'static str, &'static str, &'static [&'static str]);

pub const BUILTIN_SIGNATURES: &[SignatureEntry] = &[
    // 前端框架
    ("React", "⚛️", &[r"react\.(?:min\.)?js", r"react[@/](\d+\.\d+)", r"__react", r"_reactFiber"]),
    ("Next.js", "▲", &[r"_next/static", r"__NEXT_DATA__", r"next[@/](\d+)"]),
    ("Vue.js", "💚", &[r"vue\.(?:min\.)?js", r"vue[@/](\d+\.\d+)", r"__vue"]),
    ("Angular", "🅰️", &[r"angular\.(?:min\.)?js", r"@angular/core", r"ng-version"]),
    ("Nuxt.js", "💚", &[r"_nuxt/", r"__NUXT", r"nuxt[@/]"]),
    ("Svelte", "🔥", &[r"svelte[@/]", r"__svelte", r"\.svelte\."]),
    ("Ember.js", "🐹", &[r"ember\.(?:min\.)?js", r"EmberENV"]),
    // 图形与动画
    ("Three.js", "🎮", &[r"three\.(?:min\.)?js", r"three[@/]r?(\d+)", r"THREE\.REVISION"]),
    ("GSAP", "🎞️", &[r"gsap\.(?:min\.)?js", r"gsap[@/](\d+\.\d+)", r"TweenMax", r"TweenLite"]),
    ("jQuery", "💲", &[r"jquery[.\-](\d+\.\d+)", r"jquery\.min\.js", r"jQuery\.fn"]),
    // UI 组件库与样式框架
    ("Bootstrap", "🅱️", &[r"bootstrap\.(?:min\.)?(?:js|css)", r"bootstrap[@/](\d+)"]),
    ("Tailwind", "🌊", &[r"tailwind(?:css)?\.(?:min\.)?css", r"tailwindcss[@/]"]),
    ("Bulma", "💪", &[r"bulma\.(?:min\.)?css", r"bulma[@/]"]),
    ("Material UI", "🎨", &[r"@mui/", r"material-ui", r"MuiButton"]),
    ("Chakra UI", "⚡", &[r"@chakra-ui/", r"chakra-ui"]),
    ("Ant Design", "🐜", &[r"ant-design", r"antd[@/]", r"antd\.min"]),
    // 数据可视化
    ("D3.js", "📊", &[r"d3\.(?:min\.)?js", r"d3[@/]v(\d+)", r"d3\.select"]),
    ("Chart.js", "📈", &[r"chart\.(?:min\.)?js", r"chart\.js[@/]", r"ChartJS"]),
    ("Plotly", "📉", &[r"plotly\.(?:min\.)?js", r"plotly[@/]"]),
    ("PIXI.js", "🎨", &[r"pixi\.(?:min\.)?js", r"pixi\.js[@/]", r"PIXI\.Application"]),
    ("Babylon.js", "🏛️", &[r"babylon\.(?:max\.)?js", r"babylonjs[@/]", r"BABYLON\."]),
    ("p5.js", "✏️", &[r"p5\.(?:min\.)?js", r"p5[@/](\d+)", r"new p5\("]),
    ("A-Frame", "🥽", &[r"aframe\.(?:min\.)?js", r"aframe[@/]", r"a-scene"]),
    ("Phaser", "🕹️", &[r"phaser\.(?:min\.)?js", r"phaser[@/]", r"Phaser\.Game"]),
    // 工具库
    ("Socket.io", "🔌", &[r"socket\.io(?:\.min)?\.js", r"socket\.io[@/]"]),
    ("Axios", "🌐", &[r"axios\.(?:min\.)?js", r"axios[@/](\d+)"]),
    ("Lodash", "🔧", &[r"lodash\.(?:min\.)?js", r"lodash[@/](\d+)"]),
    ("Moment.js", "⏰", &[r"moment\.(?:min\.)?js", r"moment[@/](\d+)"]),
    ("Framer Motion", "🎭", &[r"framer-motion", r"motion[@/](\d+)"]),
    ("Lottie", "🎬", &[r"lottie\.(?:min\.)?js", r"lottie-web", r"lottie[@/]"]),
    ("Alpine.js", "🏔️", &[r"alpine\.(?:min\.)?js", r"alpinejs[@/]", r"x-data="]),
    ("Stimulus", "⚡", &[r"stimulus[@/]", r"@hotwired/stimulus"]),
    ("Htmx", "🔄", &[r"htmx\.(?:min\.)?js", r"htmx[@/]", r"hx-get="]),
    // 构建工具
    ("Webpack", "📦", &[r"webpackJsonp", r"webpackChunk", r"webpack-runtime", r"\.chunk\.js"]),
    ("Vite", "⚡", &[r"/@vite/", r"vite[@/](\d+)", r"__vite_"]),
    ("Parcel", "📦", &[r"parcel[@/]", r"parcelRequire"]),
    ("Rollup", "📦", &[r"rollup[@/]", r"ROLLUP_"]),
    ("esbuild", "⚡", &[r"esbuild[@/]", r"// node_modules/.pnpm"]),
    ("TypeScript", "🔷", &[r"typescript[@/]", r"\.tsx?\.js"]),
    // CMS 与建站平台
    ("WordPress", "🔵", &[r"wp-content/", r"wp-includes/", r"wordpress"]),
    ("Shopify", "🛍️", &[r"cdn\.shopify\.com", r"shopify\.com/s/files"]),
    ("Wix", "🌐", &[r"static\.wixstatic\.com", r"wix\.com"]),
    ("Webflow", "🌊", &[r"webflow\.com", r"Webflow\."]),
    ("Squarespace", "⬛", &[r"squarespace\.com", r"sqspcdn\.com"]),
    // 统计分析与CDN
    ("Google Tag Mgr", "📌", &[r"googletagmanager\.com", r"GTM-"]),
    ("Google Analytics", "📉", &[r"google-analytics\.com", r"gtag/js", r"ga\.js"]),
    ("Google Fonts", "🔤", &[r"fonts\.googleapis\.com", r"fonts\.gstatic\.com"]),
    ("Cloudflare", "☁️", &[r"cdnjs\.cloudflare\.com", r"cloudflare\.com"]),
    ("AWS CloudFront", "☁️", &[r"cloudfront\.net"]),
    ("jsDelivr", "📦", &[r"cdn\.jsdelivr\.net"]),
    ("unpkg", "📦", &[r"unpkg\.com"]),
    // 嵌入式组件
    ("Sentry", "🔍", &[r"sentry\.io", r"@sentry/", r"Sentry\.init"]),
    ("Intercom", "💬", &[r"intercom\.io", r"Intercom\("]),
    ("Hotjar", "🔥", &[r"hotjar\.com", r"hj\("]),
    ("Stripe", "💳", &[r"js\.stripe\.com", r"Stripe\("]),
    ("reCAPTCHA", "🤖", &[r"recaptcha", r"google\.com/recaptcha"]),
];

/// 内置签名库转换为规则列表
pub fn builtin_rules() -> Vec<LibraryRule> {
    BUILTIN_SIGNATURES
        .iter()
        .map(|(name, icon, signatures)| LibraryRule::new(name, icon, signatures))
        .collect()
}
