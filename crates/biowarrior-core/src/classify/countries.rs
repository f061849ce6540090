//! Compiled-in ISO 3166-1 country table with continent assignments.
//!
//! Names are the ISO short names. `ALIASES` adds common English names and the
//! UN M49 spellings used by the UNdata exports; every alias targets an alpha-2
//! code present in `COUNTRIES`.

use super::Continent::{self, *};

/// A single ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub alpha2: &'static str,
    pub name: &'static str,
    pub continent: Continent,
}

const fn c(alpha2: &'static str, name: &'static str, continent: Continent) -> CountryEntry {
    CountryEntry { alpha2, name, continent }
}

pub const COUNTRIES: &[CountryEntry] = &[
    c("AF", "Afghanistan", AS),
    c("AX", "Åland Islands", EU),
    c("AL", "Albania", EU),
    c("DZ", "Algeria", AF),
    c("AS", "American Samoa", OC),
    c("AD", "Andorra", EU),
    c("AO", "Angola", AF),
    c("AI", "Anguilla", NA),
    c("AQ", "Antarctica", AN),
    c("AG", "Antigua and Barbuda", NA),
    c("AR", "Argentina", SA),
    c("AM", "Armenia", AS),
    c("AW", "Aruba", NA),
    c("AU", "Australia", OC),
    c("AT", "Austria", EU),
    c("AZ", "Azerbaijan", AS),
    c("BS", "Bahamas", NA),
    c("BH", "Bahrain", AS),
    c("BD", "Bangladesh", AS),
    c("BB", "Barbados", NA),
    c("BY", "Belarus", EU),
    c("BE", "Belgium", EU),
    c("BZ", "Belize", NA),
    c("BJ", "Benin", AF),
    c("BM", "Bermuda", NA),
    c("BT", "Bhutan", AS),
    c("BO", "Bolivia, Plurinational State of", SA),
    c("BQ", "Bonaire, Sint Eustatius and Saba", NA),
    c("BA", "Bosnia and Herzegovina", EU),
    c("BW", "Botswana", AF),
    c("BV", "Bouvet Island", AN),
    c("BR", "Brazil", SA),
    c("IO", "British Indian Ocean Territory", AS),
    c("BN", "Brunei Darussalam", AS),
    c("BG", "Bulgaria", EU),
    c("BF", "Burkina Faso", AF),
    c("BI", "Burundi", AF),
    c("CV", "Cabo Verde", AF),
    c("KH", "Cambodia", AS),
    c("CM", "Cameroon", AF),
    c("CA", "Canada", NA),
    c("KY", "Cayman Islands", NA),
    c("CF", "Central African Republic", AF),
    c("TD", "Chad", AF),
    c("CL", "Chile", SA),
    c("CN", "China", AS),
    c("CX", "Christmas Island", AS),
    c("CC", "Cocos (Keeling) Islands", AS),
    c("CO", "Colombia", SA),
    c("KM", "Comoros", AF),
    c("CG", "Congo", AF),
    c("CD", "Congo, The Democratic Republic of the", AF),
    c("CK", "Cook Islands", OC),
    c("CR", "Costa Rica", NA),
    c("CI", "Côte d'Ivoire", AF),
    c("HR", "Croatia", EU),
    c("CU", "Cuba", NA),
    c("CW", "Curaçao", NA),
    c("CY", "Cyprus", AS),
    c("CZ", "Czechia", EU),
    c("DK", "Denmark", EU),
    c("DJ", "Djibouti", AF),
    c("DM", "Dominica", NA),
    c("DO", "Dominican Republic", NA),
    c("EC", "Ecuador", SA),
    c("EG", "Egypt", AF),
    c("SV", "El Salvador", NA),
    c("GQ", "Equatorial Guinea", AF),
    c("ER", "Eritrea", AF),
    c("EE", "Estonia", EU),
    c("SZ", "Eswatini", AF),
    c("ET", "Ethiopia", AF),
    c("FK", "Falkland Islands (Malvinas)", SA),
    c("FO", "Faroe Islands", EU),
    c("FJ", "Fiji", OC),
    c("FI", "Finland", EU),
    c("FR", "France", EU),
    c("GF", "French Guiana", SA),
    c("PF", "French Polynesia", OC),
    c("TF", "French Southern Territories", AN),
    c("GA", "Gabon", AF),
    c("GM", "Gambia", AF),
    c("GE", "Georgia", AS),
    c("DE", "Germany", EU),
    c("GH", "Ghana", AF),
    c("GI", "Gibraltar", EU),
    c("GR", "Greece", EU),
    c("GL", "Greenland", NA),
    c("GD", "Grenada", NA),
    c("GP", "Guadeloupe", NA),
    c("GU", "Guam", OC),
    c("GT", "Guatemala", NA),
    c("GG", "Guernsey", EU),
    c("GN", "Guinea", AF),
    c("GW", "Guinea-Bissau", AF),
    c("GY", "Guyana", SA),
    c("HT", "Haiti", NA),
    c("HM", "Heard Island and McDonald Islands", AN),
    c("VA", "Holy See (Vatican City State)", EU),
    c("HN", "Honduras", NA),
    c("HK", "Hong Kong", AS),
    c("HU", "Hungary", EU),
    c("IS", "Iceland", EU),
    c("IN", "India", AS),
    c("ID", "Indonesia", AS),
    c("IR", "Iran, Islamic Republic of", AS),
    c("IQ", "Iraq", AS),
    c("IE", "Ireland", EU),
    c("IM", "Isle of Man", EU),
    c("IL", "Israel", AS),
    c("IT", "Italy", EU),
    c("JM", "Jamaica", NA),
    c("JP", "Japan", AS),
    c("JE", "Jersey", EU),
    c("JO", "Jordan", AS),
    c("KZ", "Kazakhstan", AS),
    c("KE", "Kenya", AF),
    c("KI", "Kiribati", OC),
    c("KP", "Korea, Democratic People's Republic of", AS),
    c("KR", "Korea, Republic of", AS),
    c("KW", "Kuwait", AS),
    c("KG", "Kyrgyzstan", AS),
    c("LA", "Lao People's Democratic Republic", AS),
    c("LV", "Latvia", EU),
    c("LB", "Lebanon", AS),
    c("LS", "Lesotho", AF),
    c("LR", "Liberia", AF),
    c("LY", "Libya", AF),
    c("LI", "Liechtenstein", EU),
    c("LT", "Lithuania", EU),
    c("LU", "Luxembourg", EU),
    c("MO", "Macao", AS),
    c("MG", "Madagascar", AF),
    c("MW", "Malawi", AF),
    c("MY", "Malaysia", AS),
    c("MV", "Maldives", AS),
    c("ML", "Mali", AF),
    c("MT", "Malta", EU),
    c("MH", "Marshall Islands", OC),
    c("MQ", "Martinique", NA),
    c("MR", "Mauritania", AF),
    c("MU", "Mauritius", AF),
    c("YT", "Mayotte", AF),
    c("MX", "Mexico", NA),
    c("FM", "Micronesia, Federated States of", OC),
    c("MD", "Moldova, Republic of", EU),
    c("MC", "Monaco", EU),
    c("MN", "Mongolia", AS),
    c("ME", "Montenegro", EU),
    c("MS", "Montserrat", NA),
    c("MA", "Morocco", AF),
    c("MZ", "Mozambique", AF),
    c("MM", "Myanmar", AS),
    c("NA", "Namibia", AF),
    c("NR", "Nauru", OC),
    c("NP", "Nepal", AS),
    c("NL", "Netherlands", EU),
    c("NC", "New Caledonia", OC),
    c("NZ", "New Zealand", OC),
    c("NI", "Nicaragua", NA),
    c("NE", "Niger", AF),
    c("NG", "Nigeria", AF),
    c("NU", "Niue", OC),
    c("NF", "Norfolk Island", OC),
    c("MK", "North Macedonia", EU),
    c("MP", "Northern Mariana Islands", OC),
    c("NO", "Norway", EU),
    c("OM", "Oman", AS),
    c("PK", "Pakistan", AS),
    c("PW", "Palau", OC),
    c("PS", "Palestine, State of", AS),
    c("PA", "Panama", NA),
    c("PG", "Papua New Guinea", OC),
    c("PY", "Paraguay", SA),
    c("PE", "Peru", SA),
    c("PH", "Philippines", AS),
    c("PN", "Pitcairn", OC),
    c("PL", "Poland", EU),
    c("PT", "Portugal", EU),
    c("PR", "Puerto Rico", NA),
    c("QA", "Qatar", AS),
    c("RE", "Réunion", AF),
    c("RO", "Romania", EU),
    c("RU", "Russian Federation", EU),
    c("RW", "Rwanda", AF),
    c("BL", "Saint Barthélemy", NA),
    c("SH", "Saint Helena, Ascension and Tristan da Cunha", AF),
    c("KN", "Saint Kitts and Nevis", NA),
    c("LC", "Saint Lucia", NA),
    c("MF", "Saint Martin (French part)", NA),
    c("PM", "Saint Pierre and Miquelon", NA),
    c("VC", "Saint Vincent and the Grenadines", NA),
    c("WS", "Samoa", OC),
    c("SM", "San Marino", EU),
    c("ST", "Sao Tome and Principe", AF),
    c("SA", "Saudi Arabia", AS),
    c("SN", "Senegal", AF),
    c("RS", "Serbia", EU),
    c("SC", "Seychelles", AF),
    c("SL", "Sierra Leone", AF),
    c("SG", "Singapore", AS),
    c("SX", "Sint Maarten (Dutch part)", NA),
    c("SK", "Slovakia", EU),
    c("SI", "Slovenia", EU),
    c("SB", "Solomon Islands", OC),
    c("SO", "Somalia", AF),
    c("ZA", "South Africa", AF),
    c("GS", "South Georgia and the South Sandwich Islands", AN),
    c("SS", "South Sudan", AF),
    c("ES", "Spain", EU),
    c("LK", "Sri Lanka", AS),
    c("SD", "Sudan", AF),
    c("SR", "Suriname", SA),
    c("SJ", "Svalbard and Jan Mayen", EU),
    c("SE", "Sweden", EU),
    c("CH", "Switzerland", EU),
    c("SY", "Syrian Arab Republic", AS),
    c("TW", "Taiwan, Province of China", AS),
    c("TJ", "Tajikistan", AS),
    c("TZ", "Tanzania, United Republic of", AF),
    c("TH", "Thailand", AS),
    c("TL", "Timor-Leste", AS),
    c("TG", "Togo", AF),
    c("TK", "Tokelau", OC),
    c("TO", "Tonga", OC),
    c("TT", "Trinidad and Tobago", NA),
    c("TN", "Tunisia", AF),
    c("TR", "Türkiye", AS),
    c("TM", "Turkmenistan", AS),
    c("TC", "Turks and Caicos Islands", NA),
    c("TV", "Tuvalu", OC),
    c("UG", "Uganda", AF),
    c("UA", "Ukraine", EU),
    c("AE", "United Arab Emirates", AS),
    c("GB", "United Kingdom", EU),
    c("US", "United States", NA),
    c("UM", "United States Minor Outlying Islands", OC),
    c("UY", "Uruguay", SA),
    c("UZ", "Uzbekistan", AS),
    c("VU", "Vanuatu", OC),
    c("VE", "Venezuela, Bolivarian Republic of", SA),
    c("VN", "Viet Nam", AS),
    c("VG", "Virgin Islands, British", NA),
    c("VI", "Virgin Islands, U.S.", NA),
    c("WF", "Wallis and Futuna", OC),
    c("EH", "Western Sahara", AF),
    c("YE", "Yemen", AS),
    c("ZM", "Zambia", AF),
    c("ZW", "Zimbabwe", AF),
];

/// Alternate spellings → alpha-2.
pub const ALIASES: &[(&str, &str)] = &[
    // Common English names
    ("Bolivia", "BO"),
    ("Brunei", "BN"),
    ("Cape Verde", "CV"),
    ("Czech Republic", "CZ"),
    ("Democratic Republic of the Congo", "CD"),
    ("DR Congo", "CD"),
    ("Republic of the Congo", "CG"),
    ("Ivory Coast", "CI"),
    ("Iran", "IR"),
    ("North Korea", "KP"),
    ("South Korea", "KR"),
    ("Laos", "LA"),
    ("Macau", "MO"),
    ("Micronesia", "FM"),
    ("Moldova", "MD"),
    ("Macedonia", "MK"),
    ("Palestine", "PS"),
    ("Russia", "RU"),
    ("Swaziland", "SZ"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tanzania", "TZ"),
    ("Turkey", "TR"),
    ("UK", "GB"),
    ("Great Britain", "GB"),
    ("USA", "US"),
    ("United States of America", "US"),
    ("Vatican City", "VA"),
    ("Holy See", "VA"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("East Timor", "TL"),
    ("Burma", "MM"),
    ("Saint Helena", "SH"),
    ("Falkland Islands", "FK"),
    ("Sint Maarten", "SX"),
    ("Saint Martin", "MF"),
    // UN M49 spellings
    ("Bolivia (Plurinational State of)", "BO"),
    ("Iran (Islamic Republic of)", "IR"),
    ("Venezuela (Bolivarian Republic of)", "VE"),
    ("Micronesia (Federated States of)", "FM"),
    ("Republic of Korea", "KR"),
    ("Democratic People's Republic of Korea", "KP"),
    ("Republic of Moldova", "MD"),
    ("United Republic of Tanzania", "TZ"),
    ("State of Palestine", "PS"),
    ("United Kingdom of Great Britain and Northern Ireland", "GB"),
    ("China, Hong Kong SAR", "HK"),
    ("China, Hong Kong Special Administrative Region", "HK"),
    ("China, Macao SAR", "MO"),
    ("China, Macao Special Administrative Region", "MO"),
    ("Netherlands (Kingdom of the)", "NL"),
    ("United States Virgin Islands", "VI"),
    ("British Virgin Islands", "VG"),
    ("Wallis and Futuna Islands", "WF"),
    ("Lao People's Dem. Rep.", "LA"),
    ("Dem. People's Rep. of Korea", "KP"),
    ("Dem. Rep. of the Congo", "CD"),
];
