//! Static member tables for the IPCC regional taxonomies.
//!
//! Member lists are kept exactly as published, including the few names that
//! appear more than once (see `known_duplicates`).

/// 1-region table: the world row only.
pub(super) const R1_COUNTRY: &[(&str, &[&str])] = &[
    ("WORLD", &["WORLD"]),
];

/// 5-region table keyed on UN country/area names.
pub(super) const R5_COUNTRY: &[(&str, &[&str])] = &[
    (
        "WORLD",
        &[
            "Burundi",
            "Comoros",
            "Djibouti",
            "Eritrea",
            "Ethiopia",
            "Kenya",
            "Madagascar",
            "Malawi",
            "Mauritius",
            "Mayotte",
            "Mozambique",
            "Réunion",
            "Rwanda",
            "Seychelles",
            "Somalia",
            "South Sudan",
            "Uganda",
            "United Republic of Tanzania",
            "Zambia",
            "Zimbabwe",
            "Angola",
            "Cameroon",
            "Central African Republic",
            "Chad",
            "Congo",
            "Democratic Republic of the Congo",
            "Equatorial Guinea",
            "Gabon",
            "Sao Tome and Principe",
            "Algeria",
            "Egypt",
            "Libya",
            "Morocco",
            "Sudan",
            "Tunisia",
            "Western Sahara",
            "Botswana",
            "Eswatini",
            "Swaziland",
            "Lesotho",
            "Namibia",
            "South Africa",
            "Benin",
            "Burkina Faso",
            "Cabo Verde",
            "Côte d'Ivoire",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
            "Liberia",
            "Mali",
            "Mauritania",
            "Niger",
            "Nigeria",
            "Saint Helena",
            "Senegal",
            "Sierra Leone",
            "Togo",
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Turkmenistan",
            "Uzbekistan",
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "China, Taiwan Province of China",
            "Dem. People's Republic of Korea",
            "Japan",
            "Mongolia",
            "Republic of Korea",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "India",
            "Iran (Islamic Republic of)",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
            "Brunei Darussalam",
            "Cambodia",
            "Indonesia",
            "Lao People's Democratic Republic",
            "Malaysia",
            "Myanmar",
            "Philippines",
            "Singapore",
            "Thailand",
            "Timor-Leste",
            "Viet Nam",
            "Armenia",
            "Azerbaijan",
            "Bahrain",
            "Cyprus",
            "Georgia",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "State of Palestine",
            "Syrian Arab Republic",
            "Türkiye",
            "United Arab Emirates",
            "Yemen",
            "Belarus",
            "Bulgaria",
            "Czechia",
            "Czech Republic",
            "Hungary",
            "Poland",
            "Republic of Moldova",
            "Romania",
            "Russian Federation",
            "Slovakia",
            "Ukraine",
            "Denmark",
            "Estonia",
            "Faroe Islands",
            "Finland",
            "Guernsey",
            "Iceland",
            "Ireland",
            "Isle of Man",
            "Jersey",
            "Latvia",
            "Lithuania",
            "Norway",
            "Sweden",
            "United Kingdom",
            "Albania",
            "Andorra",
            "Bosnia and Herzegovina",
            "Croatia",
            "Gibraltar",
            "Greece",
            "Holy See",
            "Italy",
            "Kosovo (under UNSC res. 1244)",
            "Malta",
            "Montenegro",
            "North Macedonia",
            "Portugal",
            "San Marino",
            "Serbia",
            "Slovenia",
            "Spain",
            "Austria",
            "Belgium",
            "France",
            "Germany",
            "Liechtenstein",
            "Luxembourg",
            "Monaco",
            "Netherlands",
            "Switzerland",
            "Anguilla",
            "Antigua and Barbuda",
            "Aruba",
            "Bahamas",
            "Barbados",
            "Bonaire, Sint Eustatius and Saba",
            "British Virgin Islands",
            "Cayman Islands",
            "Cuba",
            "Curaçao",
            "Dominica",
            "Dominican Republic",
            "Grenada",
            "Guadeloupe",
            "Haiti",
            "Jamaica",
            "Martinique",
            "Montserrat",
            "Puerto Rico",
            "Saint Barthélemy",
            "Saint Kitts and Nevis",
            "Saint Lucia",
            "Saint Martin (French part)",
            "Saint Vincent and the Grenadines",
            "Sint Maarten (Dutch part)",
            "Trinidad and Tobago",
            "Turks and Caicos Islands",
            "United States Virgin Islands",
            "Belize",
            "Costa Rica",
            "El Salvador",
            "Guatemala",
            "Honduras",
            "Mexico",
            "Nicaragua",
            "Panama",
            "Argentina",
            "Bolivia (Plurinational State of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Ecuador",
            "Falkland Islands (Malvinas)",
            "French Guiana",
            "Guyana",
            "Paraguay",
            "Peru",
            "Suriname",
            "Uruguay",
            "Venezuela (Bolivarian Republic of)",
            "Bermuda",
            "Canada",
            "Greenland",
            "Saint Pierre and Miquelon",
            "United States of America",
            "Australia",
            "New Zealand",
            "Fiji",
            "New Caledonia",
            "Papua New Guinea",
            "Solomon Islands",
            "Vanuatu",
            "Guam",
            "Kiribati",
            "Marshall Islands",
            "Micronesia (Fed. States of)",
            "Nauru",
            "Northern Mariana Islands",
            "Palau",
            "American Samoa",
            "Cook Islands",
            "French Polynesia",
            "Niue",
            "Samoa",
            "Tokelau",
            "Tonga",
            "Tuvalu",
            "Wallis and Futuna Islands",
            "Turkey",
            "Other non-specified areas",
            "Channel Islands",
            "Faeroe Islands",
            "TFYR Macedonia",
            "Caribbean Netherlands",
            "Netherlands Antilles",
        ],
    ),
    (
        "R5ASIA",
        &[
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "Mongolia",
            "China, Taiwan Province of China",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "India",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
            "Brunei Darussalam",
            "Cambodia",
            "Dem. People's Republic of Korea",
            "Timor-Leste",
            "Indonesia",
            "Lao People's Democratic Republic",
            "Malaysia",
            "Myanmar",
            "Papua New Guinea",
            "Philippines",
            "Republic of Korea",
            "Singapore",
            "Thailand",
            "Viet Nam",
        ],
    ),
    (
        "R5LAM",
        &[
            "Argentina",
            "Bahamas",
            "Barbados",
            "Belize",
            "Venezuela (Bolivarian Republic of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Costa Rica",
            "Cuba",
            "Dominican Republic",
            "Ecuador",
            "El Salvador",
            "Guadeloupe",
            "Guatemala",
            "Guyana",
            "Haiti",
            "Honduras",
            "Jamaica",
            "Martinique",
            "Mexico",
            "Aruba",
            "Bonaire, Sint Eustatius and Saba",
            "Curaçao",
            "Caribbean Netherlands",
            "Nicaragua",
            "Panama",
            "Paraguay",
            "Peru",
            "Puerto Rico",
            "Suriname",
            "Trinidad and Tobago",
            "Uruguay",
            "Venezuela (Bolivarian Republic of)",
            "Saint Vincent and the Grenadines",
            "United States Virgin Islands",
            "French Guiana",
            "Saint Lucia",
            "Turks and Caicos Islands",
            "Grenada",
            "Bolivia (Plurinational State of)",
            "Sao Tome and Principe",
        ],
    ),
    (
        "R5MAF",
        &[
            "Bahrain",
            "Iran (Islamic Republic of)",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "Syrian Arab Republic",
            "United Arab Emirates",
            "Yemen",
            "Algeria",
            "Angola",
            "Benin",
            "Botswana",
            "Burkina Faso",
            "Burundi",
            "Côte d'Ivoire",
            "Cameroon",
            "Cabo Verde",
            "Central African Republic",
            "Chad",
            "Comoros",
            "Congo",
            "Democratic Republic of the Congo",
            "Djibouti",
            "Egypt",
            "Equatorial Guinea",
            "Eritrea",
            "Ethiopia",
            "Gabon",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
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
            "Réunion",
            "Rwanda",
            "Senegal",
            "Sierra Leone",
            "Somalia",
            "South Africa",
            "Sudan",
            "Swaziland",
            "Togo",
            "Tunisia",
            "Uganda",
            "United Republic of Tanzania",
            "Western Sahara",
            "Zambia",
            "Zimbabwe",
            "Mayotte",
            "Eswatini",
            "State of Palestine",
        ],
    ),
    (
        "R5OECD90+EU",
        &[
            "Albania",
            "Austria",
            "Belgium",
            "Bosnia and Herzegovina",
            "Bulgaria",
            "Croatia",
            "Cyprus",
            "Czechia",
            "Czech Republic",
            "Denmark",
            "Estonia",
            "Finland",
            "France",
            "Germany",
            "Greece",
            "Hungary",
            "Iceland",
            "Ireland",
            "Italy",
            "Latvia",
            "Lithuania",
            "Luxembourg",
            "North Macedonia",
            "TFYR Macedonia",
            "Malta",
            "Montenegro",
            "Netherlands",
            "Norway",
            "Poland",
            "Portugal",
            "Spain",
            "Sweden",
            "Switzerland",
            "Turkey",
            "United Kingdom",
            "Canada",
            "United States of America",
            "Australia",
            "Fiji",
            "French Polynesia",
            "Guam",
            "Japan",
            "New Caledonia",
            "New Zealand",
            "Romania",
            "Samoa",
            "Serbia",
            "Slovakia",
            "Slovenia",
            "Solomon Islands",
            "Vanuatu",
            "Tonga",
            "Micronesia (Fed. States of)",
        ],
    ),
    (
        "R5REF",
        &[
            "Armenia",
            "Azerbaijan",
            "Belarus",
            "Georgia",
            "Kazakhstan",
            "Kyrgyzstan",
            "Republic of Moldova",
            "Russian Federation",
            "Tajikistan",
            "Turkmenistan",
            "Ukraine",
            "Uzbekistan",
        ],
    ),
];

/// 6-region table keyed on UN country/area names.
pub(super) const R6_COUNTRY: &[(&str, &[&str])] = &[
    (
        "WORLD",
        &[
            "Burundi",
            "Comoros",
            "Djibouti",
            "Eritrea",
            "Ethiopia",
            "Kenya",
            "Madagascar",
            "Malawi",
            "Mauritius",
            "Mayotte",
            "Mozambique",
            "Réunion",
            "Rwanda",
            "Seychelles",
            "Somalia",
            "South Sudan",
            "Uganda",
            "United Republic of Tanzania",
            "Zambia",
            "Zimbabwe",
            "Angola",
            "Cameroon",
            "Central African Republic",
            "Chad",
            "Congo",
            "Democratic Republic of the Congo",
            "Equatorial Guinea",
            "Gabon",
            "Sao Tome and Principe",
            "Algeria",
            "Egypt",
            "Libya",
            "Morocco",
            "Sudan",
            "Tunisia",
            "Western Sahara",
            "Botswana",
            "Eswatini",
            "Swaziland",
            "Lesotho",
            "Namibia",
            "South Africa",
            "Benin",
            "Burkina Faso",
            "Cabo Verde",
            "Côte d'Ivoire",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
            "Liberia",
            "Mali",
            "Mauritania",
            "Niger",
            "Nigeria",
            "Saint Helena",
            "Senegal",
            "Sierra Leone",
            "Togo",
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Turkmenistan",
            "Uzbekistan",
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "China, Taiwan Province of China",
            "Dem. People's Republic of Korea",
            "Japan",
            "Mongolia",
            "Republic of Korea",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "India",
            "Iran (Islamic Republic of)",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
            "Brunei Darussalam",
            "Cambodia",
            "Indonesia",
            "Lao People's Democratic Republic",
            "Malaysia",
            "Myanmar",
            "Philippines",
            "Singapore",
            "Thailand",
            "Timor-Leste",
            "Viet Nam",
            "Armenia",
            "Azerbaijan",
            "Bahrain",
            "Cyprus",
            "Georgia",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "State of Palestine",
            "Syrian Arab Republic",
            "Türkiye",
            "United Arab Emirates",
            "Yemen",
            "Belarus",
            "Bulgaria",
            "Czechia",
            "Czech Republic",
            "Hungary",
            "Poland",
            "Republic of Moldova",
            "Romania",
            "Russian Federation",
            "Slovakia",
            "Ukraine",
            "Denmark",
            "Estonia",
            "Faroe Islands",
            "Finland",
            "Guernsey",
            "Iceland",
            "Ireland",
            "Isle of Man",
            "Jersey",
            "Latvia",
            "Lithuania",
            "Norway",
            "Sweden",
            "United Kingdom",
            "Albania",
            "Andorra",
            "Bosnia and Herzegovina",
            "Croatia",
            "Gibraltar",
            "Greece",
            "Holy See",
            "Italy",
            "Kosovo (under UNSC res. 1244)",
            "Malta",
            "Montenegro",
            "North Macedonia",
            "Portugal",
            "San Marino",
            "Serbia",
            "Slovenia",
            "Spain",
            "Austria",
            "Belgium",
            "France",
            "Germany",
            "Liechtenstein",
            "Luxembourg",
            "Monaco",
            "Netherlands",
            "Switzerland",
            "Anguilla",
            "Antigua and Barbuda",
            "Aruba",
            "Bahamas",
            "Barbados",
            "Bonaire, Sint Eustatius and Saba",
            "British Virgin Islands",
            "Cayman Islands",
            "Cuba",
            "Curaçao",
            "Dominica",
            "Dominican Republic",
            "Grenada",
            "Guadeloupe",
            "Haiti",
            "Jamaica",
            "Martinique",
            "Montserrat",
            "Puerto Rico",
            "Saint Barthélemy",
            "Saint Kitts and Nevis",
            "Saint Lucia",
            "Saint Martin (French part)",
            "Saint Vincent and the Grenadines",
            "Sint Maarten (Dutch part)",
            "Trinidad and Tobago",
            "Turks and Caicos Islands",
            "United States Virgin Islands",
            "Belize",
            "Costa Rica",
            "El Salvador",
            "Guatemala",
            "Honduras",
            "Mexico",
            "Nicaragua",
            "Panama",
            "Argentina",
            "Bolivia (Plurinational State of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Ecuador",
            "Falkland Islands (Malvinas)",
            "French Guiana",
            "Guyana",
            "Paraguay",
            "Peru",
            "Suriname",
            "Uruguay",
            "Venezuela (Bolivarian Republic of)",
            "Bermuda",
            "Canada",
            "Greenland",
            "Saint Pierre and Miquelon",
            "United States of America",
            "Australia",
            "New Zealand",
            "Fiji",
            "New Caledonia",
            "Papua New Guinea",
            "Solomon Islands",
            "Vanuatu",
            "Guam",
            "Kiribati",
            "Marshall Islands",
            "Micronesia (Fed. States of)",
            "Nauru",
            "Northern Mariana Islands",
            "Palau",
            "American Samoa",
            "Cook Islands",
            "French Polynesia",
            "Niue",
            "Samoa",
            "Tokelau",
            "Tonga",
            "Tuvalu",
            "Wallis and Futuna Islands",
            "Turkey",
            "Other non-specified areas",
            "Channel Islands",
            "Faeroe Islands",
            "TFYR Macedonia",
            "Caribbean Netherlands",
            "Netherlands Antilles",
        ],
    ),
    (
        "R6ASIA",
        &[
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "Mongolia",
            "China, Taiwan Province of China",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "India",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
            "Brunei Darussalam",
            "Cambodia",
            "Dem. People's Republic of Korea",
            "Timor-Leste",
            "Indonesia",
            "Lao People's Democratic Republic",
            "Malaysia",
            "Myanmar",
            "Papua New Guinea",
            "Philippines",
            "Republic of Korea",
            "Singapore",
            "Thailand",
            "Viet Nam",
        ],
    ),
    (
        "R6LAM",
        &[
            "Argentina",
            "Bahamas",
            "Barbados",
            "Belize",
            "Venezuela (Bolivarian Republic of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Costa Rica",
            "Cuba",
            "Dominican Republic",
            "Ecuador",
            "El Salvador",
            "Guadeloupe",
            "Guatemala",
            "Guyana",
            "Haiti",
            "Honduras",
            "Jamaica",
            "Martinique",
            "Mexico",
            "Aruba",
            "Bonaire, Sint Eustatius and Saba",
            "Curaçao",
            "Caribbean Netherlands",
            "Nicaragua",
            "Panama",
            "Paraguay",
            "Peru",
            "Puerto Rico",
            "Suriname",
            "Trinidad and Tobago",
            "Uruguay",
            "Venezuela (Bolivarian Republic of)",
            "Saint Vincent and the Grenadines",
            "United States Virgin Islands",
            "French Guiana",
            "Saint Lucia",
            "Turks and Caicos Islands",
            "Grenada",
            "Bolivia (Plurinational State of)",
            "Sao Tome and Principe",
        ],
    ),
    (
        "R6MIDDLE_EAST",
        &[
            "Bahrain",
            "Iran (Islamic Republic of)",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "Syrian Arab Republic",
            "United Arab Emirates",
            "Yemen",
        ],
    ),
    (
        "R6AFRICA",
        &[
            "Algeria",
            "Angola",
            "Benin",
            "Botswana",
            "Burkina Faso",
            "Burundi",
            "Côte d'Ivoire",
            "Cameroon",
            "Cabo Verde",
            "Central African Republic",
            "Chad",
            "Comoros",
            "Congo",
            "Democratic Republic of the Congo",
            "Djibouti",
            "Egypt",
            "Equatorial Guinea",
            "Eritrea",
            "Ethiopia",
            "Gabon",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
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
            "Réunion",
            "Rwanda",
            "Senegal",
            "Sierra Leone",
            "Somalia",
            "South Africa",
            "Sudan",
            "Swaziland",
            "Togo",
            "Tunisia",
            "Uganda",
            "United Republic of Tanzania",
            "Western Sahara",
            "Zambia",
            "Zimbabwe",
            "Mayotte",
            "Eswatini",
            "State of Palestine",
        ],
    ),
    (
        "R6OECD90+EU",
        &[
            "Albania",
            "Austria",
            "Belgium",
            "Bosnia and Herzegovina",
            "Bulgaria",
            "Croatia",
            "Cyprus",
            "Czech Republic",
            "Czechia",
            "Denmark",
            "Estonia",
            "Finland",
            "France",
            "Germany",
            "Greece",
            "Hungary",
            "Iceland",
            "Ireland",
            "Italy",
            "Latvia",
            "Lithuania",
            "Luxembourg",
            "North Macedonia",
            "TFYR Macedonia",
            "Malta",
            "Montenegro",
            "Netherlands",
            "Norway",
            "Poland",
            "Portugal",
            "Spain",
            "Sweden",
            "Switzerland",
            "Turkey",
            "United Kingdom",
            "Canada",
            "United States of America",
            "Australia",
            "Fiji",
            "French Polynesia",
            "Guam",
            "Japan",
            "New Caledonia",
            "New Zealand",
            "Romania",
            "Samoa",
            "Serbia",
            "Slovakia",
            "Slovenia",
            "Solomon Islands",
            "Vanuatu",
            "Tonga",
            "Micronesia (Fed. States of)",
        ],
    ),
    (
        "R6REF",
        &[
            "Armenia",
            "Azerbaijan",
            "Belarus",
            "Georgia",
            "Kazakhstan",
            "Kyrgyzstan",
            "Republic of Moldova",
            "Russian Federation",
            "Tajikistan",
            "Turkmenistan",
            "Ukraine",
            "Uzbekistan",
        ],
    ),
];

/// 10-region table keyed on UN country/area names.
pub(super) const R10_COUNTRY: &[(&str, &[&str])] = &[
    (
        "WORLD",
        &[
            "Burundi",
            "Comoros",
            "Djibouti",
            "Eritrea",
            "Ethiopia",
            "Kenya",
            "Madagascar",
            "Malawi",
            "Mauritius",
            "Mayotte",
            "Mozambique",
            "Réunion",
            "Rwanda",
            "Seychelles",
            "Somalia",
            "South Sudan",
            "Uganda",
            "United Republic of Tanzania",
            "Zambia",
            "Zimbabwe",
            "Angola",
            "Cameroon",
            "Central African Republic",
            "Chad",
            "Congo",
            "Democratic Republic of the Congo",
            "Equatorial Guinea",
            "Gabon",
            "Sao Tome and Principe",
            "Algeria",
            "Egypt",
            "Libya",
            "Morocco",
            "Sudan",
            "Tunisia",
            "Western Sahara",
            "Botswana",
            "Eswatini",
            "Swaziland",
            "Lesotho",
            "Namibia",
            "South Africa",
            "Benin",
            "Burkina Faso",
            "Cabo Verde",
            "Côte d'Ivoire",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
            "Liberia",
            "Mali",
            "Mauritania",
            "Niger",
            "Nigeria",
            "Saint Helena",
            "Senegal",
            "Sierra Leone",
            "Togo",
            "Kazakhstan",
            "Kyrgyzstan",
            "Tajikistan",
            "Turkmenistan",
            "Uzbekistan",
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "China, Taiwan Province of China",
            "Dem. People's Republic of Korea",
            "Japan",
            "Mongolia",
            "Republic of Korea",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "India",
            "Iran (Islamic Republic of)",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
            "Brunei Darussalam",
            "Cambodia",
            "Indonesia",
            "Lao People's Democratic Republic",
            "Malaysia",
            "Myanmar",
            "Philippines",
            "Singapore",
            "Thailand",
            "Timor-Leste",
            "Viet Nam",
            "Armenia",
            "Azerbaijan",
            "Bahrain",
            "Cyprus",
            "Georgia",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "State of Palestine",
            "Syrian Arab Republic",
            "Türkiye",
            "United Arab Emirates",
            "Yemen",
            "Belarus",
            "Bulgaria",
            "Czechia",
            "Czech Republic",
            "Hungary",
            "Poland",
            "Republic of Moldova",
            "Romania",
            "Russian Federation",
            "Slovakia",
            "Ukraine",
            "Denmark",
            "Estonia",
            "Faroe Islands",
            "Finland",
            "Guernsey",
            "Iceland",
            "Ireland",
            "Isle of Man",
            "Jersey",
            "Latvia",
            "Lithuania",
            "Norway",
            "Sweden",
            "United Kingdom",
            "Albania",
            "Andorra",
            "Bosnia and Herzegovina",
            "Croatia",
            "Gibraltar",
            "Greece",
            "Holy See",
            "Italy",
            "Kosovo (under UNSC res. 1244)",
            "Malta",
            "Montenegro",
            "North Macedonia",
            "Portugal",
            "San Marino",
            "Serbia",
            "Slovenia",
            "Spain",
            "Austria",
            "Belgium",
            "France",
            "Germany",
            "Liechtenstein",
            "Luxembourg",
            "Monaco",
            "Netherlands",
            "Switzerland",
            "Anguilla",
            "Antigua and Barbuda",
            "Aruba",
            "Bahamas",
            "Barbados",
            "Bonaire, Sint Eustatius and Saba",
            "British Virgin Islands",
            "Cayman Islands",
            "Cuba",
            "Curaçao",
            "Dominica",
            "Dominican Republic",
            "Grenada",
            "Guadeloupe",
            "Haiti",
            "Jamaica",
            "Martinique",
            "Montserrat",
            "Puerto Rico",
            "Saint Barthélemy",
            "Saint Kitts and Nevis",
            "Saint Lucia",
            "Saint Martin (French part)",
            "Saint Vincent and the Grenadines",
            "Sint Maarten (Dutch part)",
            "Trinidad and Tobago",
            "Turks and Caicos Islands",
            "United States Virgin Islands",
            "Belize",
            "Costa Rica",
            "El Salvador",
            "Guatemala",
            "Honduras",
            "Mexico",
            "Nicaragua",
            "Panama",
            "Argentina",
            "Bolivia (Plurinational State of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Ecuador",
            "Falkland Islands (Malvinas)",
            "French Guiana",
            "Guyana",
            "Paraguay",
            "Peru",
            "Suriname",
            "Uruguay",
            "Venezuela (Bolivarian Republic of)",
            "Bermuda",
            "Canada",
            "Greenland",
            "Saint Pierre and Miquelon",
            "United States of America",
            "Australia",
            "New Zealand",
            "Fiji",
            "New Caledonia",
            "Papua New Guinea",
            "Solomon Islands",
            "Vanuatu",
            "Guam",
            "Kiribati",
            "Marshall Islands",
            "Micronesia (Fed. States of)",
            "Nauru",
            "Northern Mariana Islands",
            "Palau",
            "American Samoa",
            "Cook Islands",
            "French Polynesia",
            "Niue",
            "Samoa",
            "Tokelau",
            "Tonga",
            "Tuvalu",
            "Wallis and Futuna Islands",
            "Turkey",
            "Other non-specified areas",
            "Channel Islands",
            "Faeroe Islands",
            "TFYR Macedonia",
            "Caribbean Netherlands",
            "Netherlands Antilles",
        ],
    ),
    (
        "R10AFRICA",
        &[
            "Algeria",
            "Angola",
            "Benin",
            "Botswana",
            "Burkina Faso",
            "Burundi",
            "Côte d'Ivoire",
            "Cameroon",
            "Cabo Verde",
            "Central African Republic",
            "Chad",
            "Comoros",
            "Congo",
            "Democratic Republic of the Congo",
            "Djibouti",
            "Egypt",
            "Equatorial Guinea",
            "Eritrea",
            "Ethiopia",
            "Gabon",
            "Gambia",
            "Ghana",
            "Guinea",
            "Guinea-Bissau",
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
            "Réunion",
            "Rwanda",
            "Senegal",
            "Sierra Leone",
            "Somalia",
            "South Africa",
            "Sudan",
            "Swaziland",
            "Togo",
            "Tunisia",
            "Uganda",
            "United Republic of Tanzania",
            "Western Sahara",
            "Zambia",
            "Mayotte",
            "Eswatini",
            "Sao Tome and Principe",
            "Zimbabwe",
        ],
    ),
    (
        "R10CHINA+",
        &[
            "China",
            "China, Hong Kong SAR",
            "China, Macao SAR",
            "China, Taiwan Province of China",
            "Cambodia",
            "Dem. People's Republic of Korea",
            "Lao People's Democratic Republic",
            "Mongolia",
            "Viet Nam",
        ],
    ),
    (
        "R10EUROPE",
        &[
            "Austria",
            "Belgium",
            "Croatia",
            "Czechia",
            "Denmark",
            "France",
            "Finland",
            "Spain",
            "Sweden",
            "Germany",
            "Greece",
            "Iceland",
            "Ireland",
            "Italy",
            "Luxembourg",
            "Netherlands",
            "Norway",
            "Portugal",
            "Switzerland",
            "Turkey",
            "Albania",
            "Bosnia and Herzegovina",
            "Bulgaria",
            "Cyprus",
            "Estonia",
            "Hungary",
            "Latvia",
            "Lithuania",
            "Malta",
            "Montenegro",
            "North Macedonia",
            "Poland",
            "Romania",
            "Serbia",
            "Slovakia",
            "Slovenia",
            "United Kingdom",
        ],
    ),
    (
        "R10INDIA+",
        &[
            "India",
            "Afghanistan",
            "Bangladesh",
            "Bhutan",
            "Maldives",
            "Nepal",
            "Pakistan",
            "Sri Lanka",
        ],
    ),
    (
        "R10LATIN_AM",
        &[
            "Argentina",
            "Bahamas",
            "Barbados",
            "Belize",
            "Venezuela (Bolivarian Republic of)",
            "Brazil",
            "Chile",
            "Colombia",
            "Costa Rica",
            "Cuba",
            "Dominican Republic",
            "Ecuador",
            "El Salvador",
            "Guadeloupe",
            "Guatemala",
            "Guyana",
            "Haiti",
            "Honduras",
            "Jamaica",
            "Martinique",
            "Mexico",
            "Aruba",
            "Bonaire, Sint Eustatius and Saba",
            "Curaçao",
            "Caribbean Netherlands",
            "Nicaragua",
            "Panama",
            "Paraguay",
            "Peru",
            "Puerto Rico",
            "Suriname",
            "Trinidad and Tobago",
            "Uruguay",
            "Saint Vincent and the Grenadines",
            "United States Virgin Islands",
            "French Guiana",
            "Saint Lucia",
            "Turks and Caicos Islands",
            "Grenada",
            "Bolivia (Plurinational State of)",
            "Venezuela (Bolivarian Republic of)",
        ],
    ),
    (
        "R10MIDDLE_EAST",
        &[
            "Bahrain",
            "Iran (Islamic Republic of)",
            "Iraq",
            "Israel",
            "Jordan",
            "Kuwait",
            "Lebanon",
            "Oman",
            "Qatar",
            "Saudi Arabia",
            "Syrian Arab Republic",
            "United Arab Emirates",
            "State of Palestine",
            "Libya",
            "Yemen",
        ],
    ),
    (
        "R10NORTH_AM",
        &[
            "Canada",
            "Guam",
            "United States of America",
        ],
    ),
    (
        "R10PAC_OECD",
        &[
            "Australia",
            "Japan",
            "New Caledonia",
            "New Zealand",
            "Samoa",
            "Solomon Islands",
            "Tonga",
            "Micronesia (Fed. States of)",
            "French Polynesia",
            "Vanuatu",
        ],
    ),
    (
        "R10REF_ECON",
        &[
            "Armenia",
            "Azerbaijan",
            "Belarus",
            "Georgia",
            "Kazakhstan",
            "Kyrgyzstan",
            "Republic of Moldova",
            "Russian Federation",
            "Tajikistan",
            "Turkmenistan",
            "Ukraine",
            "Uzbekistan",
        ],
    ),
    (
        "R10REST_ASIA",
        &[
            "Brunei Darussalam",
            "Timor-Leste",
            "Indonesia",
            "Malaysia",
            "Myanmar",
            "Papua New Guinea",
            "Philippines",
            "Republic of Korea",
            "Singapore",
            "Thailand",
            "Fiji",
        ],
    ),
];

/// 5-region proxies built from UN aggregate labels.
pub(super) const R5_PROXY: &[(&str, &[&str])] = &[
    ("WORLD", &["WORLD"]),
    ("R5MAF", &["AFRICA"]),
    ("R5LAM", &["LATIN AMERICA AND THE CARIBBEAN"]),
    ("R5ASIA", &["ASIA"]),
    ("R5OECD90+EU", &["More developed regions"]),
    ("R5REF", &["Russian Federation"]),
];

/// 6-region proxies built from UN aggregate labels.
pub(super) const R6_PROXY: &[(&str, &[&str])] = &[
    ("WORLD", &["WORLD"]),
    ("R6AFRICA", &["AFRICA"]),
    ("R6LAM", &["LATIN AMERICA AND THE CARIBBEAN"]),
    ("R6ASIA", &["ASIA"]),
    ("R6MIDDLE_EAST", &["Western Asia"]),
    ("R6OECD90+EU", &["More developed regions"]),
    ("R6REF", &["Russian Federation"]),
];

/// 10-region proxies built from UN aggregate labels.
pub(super) const R10_PROXY: &[(&str, &[&str])] = &[
    ("WORLD", &["WORLD"]),
    ("R10AFRICA", &["AFRICA"]),
    ("R10CHINA+", &["China"]),
    ("R10EUROPE", &["EUROPE"]),
    ("R10INDIA+", &["Southern Asia"]),
    ("R10LATIN_AM", &["LATIN AMERICA AND THE CARIBBEAN"]),
    ("R10MIDDLE_EAST", &["Western Asia"]),
    ("R10NORTH_AM", &["NORTHERN AMERICA"]),
    ("R10PAC_OECD", &["Japan", "OCEANIA"]),
    ("R10REF_ECON", &["Russian Federation"]),
    ("R10REST_ASIA", &["South-Eastern Asia"]),
];
