//! Built-in route catalog.
//!
//! The base list is resolved in declaration order, so overlapping
//! patterns are ordered here on purpose: a broader pattern must come
//! after anything more specific it would otherwise shadow. New routes
//! go next to related ones, not blindly at the end.

use crate::routing::{PageRoute, RouteDefinition};

/// Routes served in every environment, in resolution order.
pub fn base_routes() -> Vec<RouteDefinition> {
    vec![
        RouteDefinition::page("about", "^/about/?$", "about/about", "About")
            .alias("/about/?$"),
        RouteDefinition::with_page(
            "annual-report",
            r"^/annual-report/?(\?.*)?$",
            PageRoute::new("annual-report/2021/annual-report", "Annual Report 2021")
                .intl_name("annual-report-2021")
                .viewport_width("device-width"),
        )
        .alias("/annual-report/?$"),
        RouteDefinition::with_page(
            "annual-report-2019",
            r"^/annual-report/2019/?(\?.*)?$",
            PageRoute::new("annual-report/2019/annual-report", "Annual Report 2019")
                .viewport_width("device-width"),
        )
        .alias("/annual-report/2019/?$"),
        RouteDefinition::with_page(
            "annual-report-2020",
            r"^/annual-report/2020/?(\?.*)?$",
            PageRoute::new("annual-report/2020/annual-report", "Annual Report 2020")
                .viewport_width("device-width"),
        )
        .alias("/annual-report/2020/?$"),
        RouteDefinition::with_page(
            "annual-report-2021",
            r"^/annual-report/2021/?(\?.*)?$",
            PageRoute::new("annual-report/2021/annual-report", "Annual Report 2021")
                .viewport_width("device-width"),
        )
        .alias("/annual-report/2021/?$"),
        RouteDefinition::page("camp", "^/camp/?$", "camp/camp", "Down Deep")
            .alias("/camp/?$"),
        RouteDefinition::redirect(
            "conference-index",
            r"^/conference/?(\?.*)?$",
            "https://www.scratchfoundation.org/scratch-conference",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::with_page(
            "conference-index-2017",
            "^/conference/2017/?$",
            PageRoute::new("conference/2017/index/index", "Scratch Conference")
                .viewport_width("device-width"),
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::page(
            "conference-details-2018",
            "^/conference/2018/:id/details/?$",
            "conference/2018/details/details",
            "Event Details",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::page(
            "conference-expectations-2018",
            "^/conference/2018/expect/?$",
            "conference/2018/expect/expect",
            "What to Expect",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::with_page(
            "conference-index-2018",
            "^/conference/2018/?$",
            PageRoute::new("conference/2018/index/index", "Scratch Conference")
                .viewport_width("device-width"),
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::page(
            "conference-plan-2018",
            "^/conference/2018/plan/?$",
            "conference/2018/plan/plan",
            "Plan Your Visit",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::page(
            "conference-schedule-2018",
            "^/conference/2018/schedule/?$",
            "conference/2018/schedule/schedule",
            "Conference Schedule",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::with_page(
            "conference-index-2019",
            "^/conference/2019/?$",
            PageRoute::new("conference/2019/index/index", "Scratch Conferences")
                .viewport_width("device-width"),
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::redirect(
            "conference-index-2020",
            "^/conference/2020/?$",
            "/conference/2021",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::with_page(
            "conference-index-2021",
            "^/conference/2021/?$",
            PageRoute::new("conference/2021/index/index", "Scratch Conferences")
                .viewport_width("device-width"),
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::redirect(
            "conference-index-2022",
            "^/conference/2022/?$",
            "https://www.scratchfoundation.org/scratch-conference",
        )
        .alias("/conference(?!/20[1-2][0-9])"),
        RouteDefinition::redirect("connect", "^/connect/?$", "https://eepurl.com/cws7_f")
            .alias("/connect/?$"),
        RouteDefinition::with_page(
            "contact-us",
            r"^/contact-us/?(\?.*)?$",
            PageRoute::new("contact-us/contact-us", "Contact Us")
                .viewport_width("device-width"),
        )
        .alias("/contact-us/?"),
        RouteDefinition::page("cookies", "^/cookies/?$", "cookies/cookies", "Cookie Policy")
            .alias("/cookies/?"),
        RouteDefinition::page("credits", "^/credits/?$", "credits/credits", "Credits")
            .alias("/info/(cards|credits|faq|donate)/?$"),
        RouteDefinition::page(
            "developers",
            "^/developers/?$",
            "developers/developers",
            "Developers",
        )
        .alias("/developers/?$"),
        RouteDefinition::page("dmca", "^/DMCA/?$", "dmca/dmca", "DMCA")
            .alias("/DMCA/?$"),
        RouteDefinition::page(
            "download",
            r"^/download/?(\?.*)?$",
            "download/download",
            "Scratch Offline Editor",
        )
        .alias("/download"),
        RouteDefinition::page(
            "educator-landing",
            r"^/educators/?(\?.*)?$",
            "teachers/landing/landing",
            "Educators",
        )
        .alias(r"/educators(?:/(faq|register|waiting))?/?(\?.*)?$"),
        RouteDefinition::page(
            "ethics",
            "^/code-of-ethics/?$",
            "ethics/ethics",
            "Research Code of Ethics",
        )
        .alias("/code-of-ethics/?$"),
        RouteDefinition::page(
            "explore",
            "^/explore/:projects(projects|studios)/:all/?$",
            "explore/explore",
            "Explore",
        )
        .alias("/explore(?!/ajax)"),
        RouteDefinition::page("faq", r"^/faq/?(\?.*)?$", "faq/faq", "FAQ")
            .alias("/faq"),
        RouteDefinition::page(
            "guidelines",
            "^/community_guidelines/?$",
            "guidelines/guidelines",
            "Scratch Community Guidelines",
        )
        .alias("/community_guidelines/?$"),
        RouteDefinition::page("ideas", r"^/ideas/?(\?.*)?$", "ideas/ideas", "Ideas")
            .alias(r"/ideas/?\??"),
        RouteDefinition::redirect(
            "jobs-redirect",
            r"^/jobs/?(\?.*)?$",
            "https://www.scratchfoundation.org/careers",
        ),
        RouteDefinition::page("join", "^/join/?$", "join/join", "Join Scratch")
            .alias("/join/?$"),
        RouteDefinition::page("messages", "^/messages/?$", "messages/container", "Messages")
            .alias("/messages(?!/ajax)"),
        RouteDefinition::with_page(
            "projects",
            r"^/projects(/editor|(/:id(\d+)(/editor|/fullscreen)?)?)?/?(\?.*)?$",
            PageRoute::new("preview/preview", "Scratch Project")
                .dynamic_meta_tags(),
        )
        .alias("/projects/?$"),
        RouteDefinition::with_page(
            "embed",
            r"^/projects/:id(\d+)/embed/?(\?.*)?$",
            PageRoute::new("preview/embed", "Scratch Project")
                .dynamic_meta_tags(),
        )
        .alias("/projects/?$"),
        RouteDefinition::page("parents", r"^/parents/?(\?.*)?$", "parents/parents", "For Parents")
            .alias("/parents/"),
        RouteDefinition::redirect("preview-faq-redirect", "^/preview-faq/?$", "/3faq")
            .alias("/preview-faq"),
        RouteDefinition::page(
            "privacypolicy",
            "^/privacy_policy/?$",
            "privacypolicy/privacypolicy",
            "Privacy Policy",
        )
        .alias("/privacy_policy/?$"),
        RouteDefinition::page(
            "privacypolicy-apps",
            "^/privacy_policy/apps?$",
            "privacypolicy-apps/privacypolicy-apps",
            "Privacy Policy",
        )
        .alias("/privacy_policy/apps?$"),
        RouteDefinition::page("research", "^/research/?$", "research/research", "Research")
            .alias("/research"),
        RouteDefinition::page(
            "scratch_1.4",
            "^/scratch_1.4/?$",
            "scratch_1.4/scratch_1.4",
            "Scratch 1.4",
        )
        .alias("/scratch_1.4"),
        RouteDefinition::page(
            "become-a-scratcher",
            "^/become-a-scratcher/?$",
            "become-a-scratcher/become-a-scratcher",
            "Become a Scratcher",
        )
        .alias("/become-a-scratcher"),
        RouteDefinition::page(
            "download-scratch2",
            r"^/download/scratch2/?(\?.*)?$",
            "download/scratch2/download",
            "Scratch 2.0",
        )
        .alias("/download/scratch2"),
        RouteDefinition::page(
            "download-scratch-link",
            r"^/download/scratch-link/?(\?.*)?$",
            "download/scratch-link/download",
            "Scratch Link Download",
        )
        .alias("/download/scratch-link"),
        RouteDefinition::redirect(
            "download-scratch-link-redirect",
            r"^/download/link/?(\?.*)?$",
            "/download/scratch-link",
        )
        .alias("/download/link"),
        RouteDefinition::page("search", "^/search/:projects/?$", "search/search", "Search")
            .alias("/search"),
        RouteDefinition::page("splash", "^/?$", "splash/splash", "Imagine, Program, Share")
            .alias("/?$"),
        RouteDefinition::page(
            "starter-projects",
            "^/starter-projects/?$",
            "starter-projects/starter-projects",
            "Starter Projects",
        )
        .alias("/starter-projects/?$"),
        RouteDefinition::redirect(
            "starter-projects-redirect",
            "^/starter_projects/?$",
            "/starter-projects",
        )
        .alias("/starter_projects/?$"),
        RouteDefinition::page(
            "student-complete-registration",
            "^/classes/complete_registration",
            "studentcompleteregistration/studentcompleteregistration",
            "Complete your Registration",
        )
        .alias("/classes/(complete_registration|.+/register/.+)"),
        RouteDefinition::page(
            "student-registration",
            "^/classes/:id/register/:token",
            "studentregistration/studentregistration",
            "Class Registration",
        )
        .alias("/classes/(complete_registration|.+/register/.+)"),
        RouteDefinition::page(
            "student-registration-token-only",
            "^/signup/:token",
            "studentregistration/studentregistration",
            "Class Registration",
        )
        .alias("/signup/.+"),
        RouteDefinition::with_page(
            "studio",
            r"^/studios/:id(\d+)(/projects|/curators|/activity|/comments)?/?(\?.*)?$",
            PageRoute::new("studio/studio", "Scratch Studio")
                .dynamic_meta_tags(),
        )
        .alias("/studios/?$"),
        RouteDefinition::page(
            "teacher-faq",
            r"^/educators/faq/?(\?.*)?$",
            "teachers/faq/faq",
            "Teacher Accounts FAQ",
        )
        .alias(r"/educators(?:/(faq|register|waiting))?/?(\?.*)?$"),
        RouteDefinition::page(
            "teacherregistration",
            r"^/educators/register/?(\?.*)?$",
            "teacherregistration/teacherregistration",
            "Teacher Registration",
        )
        .alias(r"/educators(?:/(faq|register|waiting))?/?(\?.*)?$"),
        RouteDefinition::page(
            "teacherwaitingroom",
            "^/educators/waiting",
            "teacherwaitingroom/teacherwaitingroom",
            "Thank you for requesting a Scratch Teacher Account",
        )
        .alias(r"/educators(?:/(faq|register|waiting))?/?(\?.*)?$"),
        RouteDefinition::page("terms", "^/terms_of_use/?$", "terms/terms", "Scratch Terms of Use")
            .alias("/terms_of_use/?$"),
        RouteDefinition::page("wedo2", r"^/wedo/?(\?.*)?$", "wedo2/wedo2", "WeDo 2.0")
            .alias("/wedo/?$"),
        RouteDefinition::page("wedo2-legacy", "^/wedo-legacy/?$", "wedo2-legacy/wedo2", "LEGO WeDo")
            .alias("/wedo-legacy/?$"),
        RouteDefinition::page("ev3", r"^/ev3/?(\?.*)?$", "ev3/ev3", "LEGO MINDSTORMS EV3")
            .alias("/ev3/?$"),
        RouteDefinition::page("microbit", r"^/microbit/?(\?.*)?$", "microbit/microbit", "micro:bit")
            .alias("/microbit/?$"),
        RouteDefinition::page(
            "vernier",
            r"^/vernier/?(\?.*)?$",
            "gdxfor/gdxfor",
            "Vernier Go Direct Force and Acceleration",
        )
        .alias("/vernier/?$"),
        RouteDefinition::page("boost", r"^/boost/?(\?.*)?$", "boost/boost", "LEGO BOOST")
            .alias("/boost/?$"),
        RouteDefinition::redirect("3-faq-redirect", "^/3faq/?$", "/faq#scratch3")
            .alias("/3faq/?$"),
        RouteDefinition::redirect("credits-redirect", "^/info/credits/?$", "/credits")
            .alias("/info/(cards|credits|faq|donate)/?$"),
        RouteDefinition::redirect("faq-redirect", "^/info/faq/?$", "/faq")
            .alias("/info/(cards|credits|faq|donate)/?$"),
        RouteDefinition::redirect(
            "donate-redirect",
            "^/info/donate/?",
            "https://www.scratchfoundation.org/donate",
        )
        .alias("/info/(cards|credits|faq|donate)/?$"),
        RouteDefinition::redirect(
            "donate-redirect2",
            "^/donate/?$",
            "https://www.scratchfoundation.org/donate",
        )
        .alias("/donate/?$"),
        RouteDefinition::redirect("download-redirect", r"^/scratch2download/?(\?.*)?$", "/download")
            .alias("/scratch2download"),
        RouteDefinition::redirect(
            "explore-projects-redirect",
            "^/explore/projects/?$",
            "/explore/projects/all",
        )
        .alias("/explore(?!/ajax)"),
        RouteDefinition::redirect("explore-redirect", "^/explore/?$", "/explore/projects/all")
            .alias("/explore(?!/ajax)"),
        RouteDefinition::redirect(
            "explore-studios-redirect",
            "^/explore/studios/?$",
            "/explore/studios/all",
        )
        .alias("/explore(?!/ajax)"),
        RouteDefinition::redirect("info-cards-redirect", "^/info/cards/?$", "/ideas"),
        RouteDefinition::redirect("help-redirect", r"^/help/?(\?.*)?$", "/ideas")
            .alias(r"/help/?(\?.*)?$"),
        RouteDefinition::redirect("hoc-redirect", r"^/hoc/?(\?.*)?$", "/ideas")
            .alias(r"/hoc/?\??"),
        RouteDefinition::redirect("hoc2014-redirect", r"^/hoc2014/?(\?.*)?$", "/ideas")
            .alias(r"/hoc2014/?\??"),
        RouteDefinition::redirect("info-redirect", r"^/info/?(\?.*)?$", "/ideas")
            .alias(r"/info/?(\?.*)?$"),
        RouteDefinition::redirect(
            "register-redirect",
            "^/accounts/standalone-registration/?$",
            "/join",
        )
        .alias("/accounts/standalone-registration/"),
        RouteDefinition::redirect("research-redirect", "^/info/research/?$", "/research")
            .alias("/info/research"),
        RouteDefinition::redirect("search-redirect", "^/search/?$", "/search/projects")
            .alias("/search"),
        RouteDefinition::redirect("sec-redirect", "^/sec/?$", "https://sip.scratch.mit.edu/sec")
            .alias("/sec"),
        RouteDefinition::redirect("splash-redirect", "^///?$", "/"),
        RouteDefinition::redirect("store", "^/store/?$", "https://scratch-foundation.myshopify.com")
            .alias("/store"),
        RouteDefinition::redirect("tips-redirect", r"^/tips/?(\?.*)?$", "/ideas")
            .alias(r"/tips/?\??"),
        RouteDefinition::redirect("things-to-try-redirect", r"^/go/?(\?.*)?$", "/ideas")
            .alias(r"/go/?\??"),
        RouteDefinition::redirect(
            "all-tutorials-redirect",
            "^/tutorials/?$",
            "/projects/editor/?tutorial=all",
        ),
        RouteDefinition::redirect(
            "create-tutorial-redirect",
            "^/create/?$",
            "/projects/editor/?tutorial=getStarted",
        ),
        RouteDefinition::redirect(
            "name-tutorial-redirect",
            "^/name/?$",
            "/projects/editor/?tutorial=name",
        ),
        RouteDefinition::redirect(
            "music-tutorial-redirect",
            "^/music/?$",
            "/projects/editor/?tutorial=music",
        ),
        RouteDefinition::redirect(
            "story-tutorial-redirect",
            "^/story/?$",
            "/projects/editor/?tutorial=tell-a-story",
        ),
        RouteDefinition::redirect(
            "pong-tutorial-redirect",
            "^/pong/?$",
            "/projects/editor/?tutorial=pong",
        ),
        RouteDefinition::redirect(
            "animateacharacter-tutorial-redirect",
            "^/animate-a-character/?$",
            "/projects/editor/?tutorial=animate-a-character",
        ),
        RouteDefinition::redirect(
            "videosensing-tutorial-redirect",
            "^/video-sensing/?$",
            "/projects/editor/?tutorial=video-sensing",
        ),
        RouteDefinition::redirect(
            "clicker-tutorial-redirect",
            "^/clicker/?$",
            "/projects/editor/?tutorial=clicker-game",
        ),
        RouteDefinition::redirect(
            "chase-tutorial-redirect",
            "^/chase/?$",
            "/projects/editor/?tutorial=chase-game",
        ),
        RouteDefinition::redirect(
            "jazz-tutorial-redirect",
            "^/jazz/?$",
            "/projects/editor/?tutorial=music",
        ),
        RouteDefinition::redirect("catch-tutorial-redirect", "^/catch/?$", "/ideas"),
        RouteDefinition::redirect("dance-tutorial-redirect", "^/dance/?$", "/ideas"),
        RouteDefinition::redirect(
            "fly-tutorial-redirect",
            "^/fly/?$",
            "/projects/editor/?tutorial=make-it-fly",
        )
        .alias("/(makeit)?fly/?$"),
        RouteDefinition::redirect(
            "makeitfly-tutorial-redirect",
            "^/makeitfly/?$",
            "/projects/editor/?tutorial=make-it-fly",
        )
        .alias("/(makeit)?fly/?$"),
        RouteDefinition::redirect(
            "imagine-if-tutorial-redirect",
            r"^/imagine/?(\?.*)?$",
            "/projects/editor/?tutorial=imagine",
        ),
        RouteDefinition::redirect("pet-tutorial-redirect", "^/pet/?$", "/ideas"),
        RouteDefinition::redirect("racegame-tutorial-redirect", "^/racegame/?$", "/ideas"),
        RouteDefinition::redirect("hide-tutorial-redirect", "^/hide/?$", "/ideas"),
        RouteDefinition::redirect("fashion-tutorial-redirect", "^/fashion/?$", "/ideas"),
        RouteDefinition::redirect("dressup-tutorial-redirect", "^/dressup/?$", "/ideas"),
        RouteDefinition::redirect("card-tutorial-redirect", "^/card/?$", "/ideas"),
        RouteDefinition::redirect("valentines-tutorial-redirect", "^/valentines/?$", "/ideas"),
        RouteDefinition::redirect("bearstack-tutorial-redirect", "^/bearstack/?$", "/ideas"),
        RouteDefinition::redirect(
            "talking-tales-tutorial-redirect",
            r"^/talking-tales/?(\?.*)?$",
            "/projects/editor?tutorial=talking",
        ),
        RouteDefinition::redirect(
            "code-a-cartoon-tutorial-redirect",
            r"^/code-a-cartoon/?(\?.*)?$",
            "/projects/331474033/editor/?tutorial=code-cartoon",
        ),
        RouteDefinition::redirect("favorite-tutorial-redirect", "^/favorite/?$", "/ideas"),
        RouteDefinition::redirect("hoops-tutorial-redirect", "^/hoops/?$", "/ideas"),
        RouteDefinition::redirect("soccer-tutorial-redirect", "^/soccer/?$", "/ideas"),
        RouteDefinition::redirect("codeweek-tutorial-redirect", "^/codeweekeu/?$", "/ideas"),
        RouteDefinition::redirect(
            "madewithcode-tutorial-redirects",
            "^/madewithcode-(name|card)/?$",
            "/ideas",
        ),
        RouteDefinition::redirect("odetocode-tutorial-redirect", "^/odetocode/?$", "/ideas"),
        RouteDefinition::redirect("makey-tutorial-redirects", "^/makey(piano|drum)?/?$", "/ideas"),
        RouteDefinition::redirect("bird-redirect", "^/bird/?$", "/ideas"),
    ]
}

/// Routes appended after the base list in development only.
pub fn development_routes() -> Vec<RouteDefinition> {
    vec![RouteDefinition::page(
        "components",
        "^/components/?$",
        "components/components",
        "Components",
    )]
}
