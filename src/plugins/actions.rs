use super::StaticContributor;

pub const ACTIONS: StaticContributor = StaticContributor::new(
    "actions",
    "Pages, site search, outlinks, downloads and content tracking",
    "General_Actions",
    &[
        ("Actions_SubmenuPages", "Actions", "getPageUrls"),
        ("Actions_SubmenuPagesEntry", "Actions", "getEntryPageUrls"),
        ("Actions_SubmenuPagesExit", "Actions", "getExitPageUrls"),
        ("Actions_SubmenuPageTitles", "Actions", "getPageTitles"),
        ("Actions_WidgetEntryPageTitles", "Actions", "getEntryPageTitles"),
        ("Actions_WidgetExitPageTitles", "Actions", "getExitPageTitles"),
        ("Actions_WidgetSearchKeywords", "Actions", "getSiteSearchKeywords"),
        ("Actions_WidgetSearchNoResultKeywords", "Actions", "getSiteSearchNoResultKeywords"),
        ("Actions_WidgetSearchCategories", "Actions", "getSiteSearchCategories"),
        ("Actions_WidgetPageUrlsFollowingSearch", "Actions", "getPageUrlsFollowingSiteSearch"),
        ("Actions_WidgetPageTitlesFollowingSearch", "Actions", "getPageTitlesFollowingSiteSearch"),
        ("General_Outlinks", "Actions", "getOutlinks"),
        ("General_Downloads", "Actions", "getDownloads"),
        ("Contents_ContentName", "Contents", "getContentNames"),
        ("Contents_ContentPiece", "Contents", "getContentPieces"),
    ],
);
