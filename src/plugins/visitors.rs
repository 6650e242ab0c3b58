//! Visitor reports. Several feature areas share the visitors category; their
//! widgets appear in registration order, and each area carries a sort hint
//! so sorted views keep the blocks in the same sequence.

use super::StaticContributor;

pub const CATEGORY: &str = "General_Visitors";

/// Position of each feature area inside the visitors category.
pub const VISITS_SUMMARY_ORDER: i32 = 10;
pub const VISITOR_LOG_ORDER: i32 = 15;
pub const VISITOR_INTEREST_ORDER: i32 = 20;
pub const VISIT_TIME_ORDER: i32 = 30;
pub const USER_COUNTRY_ORDER: i32 = 40;
pub const DEVICES_ORDER: i32 = 50;

pub const VISITS_SUMMARY: StaticContributor = StaticContributor::new(
    "visits_summary",
    "Visits overview, evolution and returning visitors",
    CATEGORY,
    &[
        ("General_EvolutionOverPeriod", "VisitsSummary", "getEvolutionGraph"),
        ("VisitsSummary_WidgetLastVisits", "VisitsSummary", "getLastVisitsGraph"),
        ("VisitsSummary_WidgetVisits", "VisitsSummary", "getSparklines"),
        ("VisitsSummary_WidgetOverviewGraph", "VisitsSummary", "index"),
        ("VisitFrequency_WidgetOverview", "VisitFrequency", "getSparklines"),
        ("VisitFrequency_WidgetGraphReturning", "VisitFrequency", "getEvolutionGraph"),
    ],
)
.with_order(VISITS_SUMMARY_ORDER);

pub const VISITOR_INTEREST: StaticContributor = StaticContributor::new(
    "visitor_interest",
    "Engagement: visit length, depth and recency",
    CATEGORY,
    &[
        ("VisitorInterest_WidgetLengths", "VisitorInterest", "getNumberOfVisitsPerVisitDuration"),
        ("VisitorInterest_WidgetPages", "VisitorInterest", "getNumberOfVisitsPerPage"),
        ("VisitorInterest_visitsByVisitCount", "VisitorInterest", "getNumberOfVisitsByVisitCount"),
        ("VisitorInterest_WidgetVisitsByDaysSinceLast", "VisitorInterest", "getNumberOfVisitsByDaysSinceLast"),
        ("CustomVariables_CustomVariables", "CustomVariables", "getCustomVariables"),
    ],
)
.with_order(VISITOR_INTEREST_ORDER);

pub const VISIT_TIME: StaticContributor = StaticContributor::new(
    "visit_time",
    "Visits per local time, server time and day of week",
    CATEGORY,
    &[
        ("VisitTime_WidgetLocalTime", "VisitTime", "getVisitInformationPerLocalTime"),
        ("VisitTime_WidgetServerTime", "VisitTime", "getVisitInformationPerServerTime"),
        ("VisitTime_VisitsByDayOfWeek", "VisitTime", "getByDayOfWeek"),
    ],
)
.with_order(VISIT_TIME_ORDER);

pub const USER_COUNTRY: StaticContributor = StaticContributor::new(
    "user_country",
    "Visitor locations",
    CATEGORY,
    &[
        ("UserCountry_WidgetLocation", "UserCountry", "getCountry"),
        ("UserCountry_Continent", "UserCountry", "getContinent"),
        ("UserCountry_Region", "UserCountry", "getRegion"),
        ("UserCountry_City", "UserCountry", "getCity"),
        ("UserCountryMap_VisitorMap", "UserCountryMap", "visitorMap"),
    ],
)
.with_order(USER_COUNTRY_ORDER);

pub const DEVICES: StaticContributor = StaticContributor::new(
    "devices",
    "Devices, software, screen and language of visitors",
    CATEGORY,
    &[
        ("DevicesDetection_DeviceType", "DevicesDetection", "getType"),
        ("DevicesDetection_DeviceBrand", "DevicesDetection", "getBrand"),
        ("DevicesDetection_DeviceModel", "DevicesDetection", "getModel"),
        ("DevicesDetection_OperatingSystemFamilies", "DevicesDetection", "getOsFamilies"),
        ("DevicesDetection_OperatingSystemVersions", "DevicesDetection", "getOsVersions"),
        ("DevicesDetection_Browsers", "DevicesDetection", "getBrowsers"),
        ("DevicesDetection_BrowserVersion", "DevicesDetection", "getBrowserVersions"),
        ("DevicesDetection_BrowserEngines", "DevicesDetection", "getBrowserEngines"),
        ("Resolution_WidgetResolutions", "Resolution", "getResolution"),
        ("Resolution_WidgetGlobalVisitors", "Resolution", "getConfiguration"),
        ("DevicePlugins_WidgetPlugins", "DevicePlugins", "getPlugin"),
        ("UserLanguage_BrowserLanguage", "UserLanguage", "getLanguage"),
        ("UserLanguage_LanguageCode", "UserLanguage", "getLanguageCode"),
        ("Provider_WidgetProviders", "Provider", "getProvider"),
    ],
)
.with_order(DEVICES_ORDER);
