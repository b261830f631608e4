// IncomeScope - core/taxonomy.rs
//
// The two fixed classification tables behind the cascading dropdowns:
// continent -> country (195 countries) and broad race -> specific identity.
// Pure static data plus lookup helpers; no I/O, no UI.

use crate::core::model::{BroadRace, Continent};

// =============================================================================
// Continent -> country
// =============================================================================

const NORTH_AMERICA: &[&str] = &[
    "Antigua and Barbuda",
    "Bahamas",
    "Barbados",
    "Belize",
    "Canada",
    "Costa Rica",
    "Cuba",
    "Dominica",
    "Dominican Republic",
    "El Salvador",
    "Grenada",
    "Guatemala",
    "Haiti",
    "Honduras",
    "Jamaica",
    "Mexico",
    "Nicaragua",
    "Panama",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Trinidad and Tobago",
    "United States",
];

const SOUTH_AMERICA: &[&str] = &[
    "Argentina",
    "Bolivia",
    "Brazil",
    "Chile",
    "Colombia",
    "Ecuador",
    "Guyana",
    "Paraguay",
    "Peru",
    "Suriname",
    "Uruguay",
    "Venezuela",
];

const EUROPE: &[&str] = &[
    "Albania",
    "Andorra",
    "Armenia",
    "Austria",
    "Azerbaijan",
    "Belarus",
    "Belgium",
    "Bosnia and Herzegovina",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Georgia",
    "Germany",
    "Greece",
    "Hungary",
    "Iceland",
    "Ireland",
    "Italy",
    "Kazakhstan",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Moldova",
    "Monaco",
    "Montenegro",
    "Netherlands",
    "North Macedonia",
    "Norway",
    "Poland",
    "Portugal",
    "Romania",
    "Russia",
    "San Marino",
    "Serbia",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
    "Switzerland",
    "Ukraine",
    "United Kingdom",
    "Vatican City",
];

const ASIA: &[&str] = &[
    "Afghanistan",
    "Bahrain",
    "Bangladesh",
    "Bhutan",
    "Brunei",
    "Cambodia",
    "China",
    "India",
    "Indonesia",
    "Iran",
    "Iraq",
    "Israel",
    "Japan",
    "Jordan",
    "Kuwait",
    "Kyrgyzstan",
    "Laos",
    "Lebanon",
    "Malaysia",
    "Maldives",
    "Mongolia",
    "Myanmar",
    "Nepal",
    "North Korea",
    "Oman",
    "Pakistan",
    "Palestine",
    "Philippines",
    "Qatar",
    "Saudi Arabia",
    "Singapore",
    "South Korea",
    "Sri Lanka",
    "Syria",
    "Tajikistan",
    "Thailand",
    "Timor-Leste",
    "Turkey",
    "Turkmenistan",
    "United Arab Emirates",
    "Uzbekistan",
    "Vietnam",
    "Yemen",
];

const AFRICA: &[&str] = &[
    "Algeria",
    "Angola",
    "Benin",
    "Botswana",
    "Burkina Faso",
    "Burundi",
    "Cabo Verde",
    "Cameroon",
    "Central African Republic",
    "Chad",
    "Comoros",
    "Democratic Republic of the Congo",
    "Djibouti",
    "Egypt",
    "Equatorial Guinea",
    "Eritrea",
    "Eswatini",
    "Ethiopia",
    "Gabon",
    "Gambia",
    "Ghana",
    "Guinea",
    "Guinea-Bissau",
    "Ivory Coast",
    "Kenya",
    "Lesotho",
    "Liberia",
    "Libya",
    "Madagascar",
    "Malawi",
    "Mali",
    "Mauritania",
    "Mauritius",
    "Morocco",
    "Mozambique",
    "Namibia",
    "Niger",
    "Nigeria",
    "Republic of the Congo",
    "Rwanda",
    "São Tomé and Príncipe",
    "Senegal",
    "Seychelles",
    "Sierra Leone",
    "Somalia",
    "South Africa",
    "South Sudan",
    "Sudan",
    "Tanzania",
    "Togo",
    "Tunisia",
    "Uganda",
    "Zambia",
    "Zimbabwe",
];

const OCEANIA: &[&str] = &[
    "Australia",
    "Fiji",
    "Kiribati",
    "Marshall Islands",
    "Micronesia",
    "Nauru",
    "New Zealand",
    "Palau",
    "Papua New Guinea",
    "Samoa",
    "Solomon Islands",
    "Tonga",
    "Tuvalu",
    "Vanuatu",
];

// =============================================================================
// Broad race -> specific identity
// =============================================================================

const WHITE: &[&str] = &[
    "German",
    "Irish",
    "Italian",
    "French",
    "Polish",
    "British",
    "Dutch",
    "Russian",
    "Greek",
    "Hungarian",
    "Norwegian",
    "Swedish",
    "Finnish",
    "Danish",
    "Portuguese",
    "Spanish",
    "Austrian",
    "Swiss",
    "Czech",
    "Slovak",
    "Lithuanian",
    "Latvian",
    "Estonian",
    "Belarusian",
    "Ukrainian",
    "Other White",
];

const BLACK: &[&str] = &[
    "Nigerian",
    "Ethiopian",
    "Ghanaian",
    "Jamaican",
    "Haitian",
    "South African",
    "Somali",
    "Afro-Latino",
    "African American",
    "Kenyan",
    "Sudanese",
    "Congolese",
    "Zimbabwean",
    "Rwandan",
    "Tanzanian",
    "Senegalese",
    "Malian",
    "Cameroonian",
    "Other Black",
];

const ASIAN: &[&str] = &[
    "Chinese",
    "Indian",
    "Filipino",
    "Vietnamese",
    "Korean",
    "Japanese",
    "Pakistani",
    "Bangladeshi",
    "Thai",
    "Indonesian",
    "Malaysian",
    "Sri Lankan",
    "Nepalese",
    "Mongolian",
    "Burmese",
    "Kazakh",
    "Uzbek",
    "Tajik",
    "Turkmen",
    "Kyrgyz",
    "Maldivian",
    "Bhutanese",
    "Other Asian",
];

const LATINO: &[&str] = &[
    "Mexican",
    "Puerto Rican",
    "Cuban",
    "Dominican",
    "Colombian",
    "Argentinian",
    "Peruvian",
    "Chilean",
    "Venezuelan",
    "Ecuadorian",
    "Bolivian",
    "Paraguayan",
    "Uruguayan",
    "Salvadoran",
    "Honduran",
    "Guatemalan",
    "Costa Rican",
    "Panamanian",
    "Nicaraguan",
    "Brazilian",
    "Other Latino",
];

const INDIGENOUS: &[&str] = &[
    "Native American",
    "First Nations (Canada)",
    "Mayan",
    "Quechua",
    "Aymara",
    "Guarani",
    "Mapuche",
    "Inuit",
    "Apache",
    "Navajo",
    "Cherokee",
    "Sioux",
    "Chickasaw",
    "Iroquois",
    "Zuni",
    "Seminole",
    "Ojibwe",
    "Tlingit",
    "Other Indigenous",
];

const OTHER: &[&str] = &[
    "Middle Eastern",
    "North African",
    "Mixed",
    "Pacific Islander",
    "Jewish",
    "Other",
];

// =============================================================================
// Lookups
// =============================================================================

/// Country options for a continent selection.
///
/// `None` (nothing selected yet) yields an empty list, mirroring the
/// empty dropdown the form shows before a continent is chosen.
pub fn countries_for(continent: Option<Continent>) -> &'static [&'static str] {
    match continent {
        Some(Continent::NorthAmerica) => NORTH_AMERICA,
        Some(Continent::SouthAmerica) => SOUTH_AMERICA,
        Some(Continent::Europe) => EUROPE,
        Some(Continent::Asia) => ASIA,
        Some(Continent::Africa) => AFRICA,
        Some(Continent::Oceania) => OCEANIA,
        None => &[],
    }
}

/// Specific-identity options for a broad racial category selection.
///
/// `None` yields an empty list, as above.
pub fn specifics_for(race: Option<BroadRace>) -> &'static [&'static str] {
    match race {
        Some(BroadRace::White) => WHITE,
        Some(BroadRace::Black) => BLACK,
        Some(BroadRace::Asian) => ASIAN,
        Some(BroadRace::Latino) => LATINO,
        Some(BroadRace::Indigenous) => INDIGENOUS,
        Some(BroadRace::Other) => OTHER,
        None => &[],
    }
}

/// Whether `country` belongs to `continent`'s fixed list.
pub fn is_country_of(continent: Continent, country: &str) -> bool {
    countries_for(Some(continent)).contains(&country)
}

/// Whether `specific` belongs to `race`'s fixed identity list.
pub fn is_specific_of(race: BroadRace, specific: &str) -> bool {
    specifics_for(Some(race)).contains(&specific)
}
