//! Current ISO-4217 currency table.
//!
//! Symbols follow common usage; a few are deliberately ASCII (BHD is "BD",
//! not the Arabic glyph) so formatted output stays stable across platforms.

use std::collections::HashMap;

use chrono::NaiveDate;
use coinage_shared::MinorUnit;
use once_cell::sync::Lazy;

const TWO: MinorUnit = MinorUnit::TWO;
const ZERO: MinorUnit = MinorUnit::ZERO;
const THREE: MinorUnit = MinorUnit::THREE;
const FOUR: MinorUnit = MinorUnit::FOUR;
const FIFTH: MinorUnit = MinorUnit::NonDecimalFifth;
const NA: MinorUnit = MinorUnit::NotApplicable;

/// A row of the static currency tables.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CurrencyRecord {
    pub code: &'static str,
    pub numeric_code: u16,
    pub minor_unit: MinorUnit,
    pub english_name: &'static str,
    pub symbol: &'static str,
    pub valid_from: Option<(i32, u32, u32)>,
    pub valid_to: Option<(i32, u32, u32)>,
}

impl CurrencyRecord {
    /// A currency without a validity window.
    pub(crate) const fn current(
        code: &'static str,
        numeric_code: u16,
        minor_unit: MinorUnit,
        english_name: &'static str,
        symbol: &'static str,
    ) -> Self {
        Self {
            code,
            numeric_code,
            minor_unit,
            english_name,
            symbol,
            valid_from: None,
            valid_to: None,
        }
    }

    /// A currency introduced on the given date.
    pub(crate) const fn since(
        code: &'static str,
        numeric_code: u16,
        minor_unit: MinorUnit,
        english_name: &'static str,
        symbol: &'static str,
        valid_from: (i32, u32, u32),
    ) -> Self {
        Self {
            code,
            numeric_code,
            minor_unit,
            english_name,
            symbol,
            valid_from: Some(valid_from),
            valid_to: None,
        }
    }

    /// A currency with a closed validity window.
    pub(crate) const fn historic(
        code: &'static str,
        numeric_code: u16,
        minor_unit: MinorUnit,
        english_name: &'static str,
        symbol: &'static str,
        valid_from: (i32, u32, u32),
        valid_to: (i32, u32, u32),
    ) -> Self {
        Self {
            code,
            numeric_code,
            minor_unit,
            english_name,
            symbol,
            valid_from: Some(valid_from),
            valid_to: Some(valid_to),
        }
    }

    pub(crate) fn introduced_on(&self) -> Option<NaiveDate> {
        self.valid_from
            .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }

    pub(crate) fn expired_on(&self) -> Option<NaiveDate> {
        self.valid_to
            .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
    }
}

/// Current ISO-4217 currencies.
pub(crate) static CURRENT: &[CurrencyRecord] = &[
    CurrencyRecord::current("AED", 784, TWO, "United Arab Emirates dirham", "د.إ"),
    CurrencyRecord::current("AFN", 971, TWO, "Afghan afghani", "؋"),
    CurrencyRecord::current("ALL", 8, TWO, "Albanian lek", "L"),
    CurrencyRecord::current("AMD", 51, TWO, "Armenian dram", "֏"),
    CurrencyRecord::current("ANG", 532, TWO, "Netherlands Antillean guilder", "ƒ"),
    CurrencyRecord::current("AOA", 973, TWO, "Angolan kwanza", "Kz"),
    CurrencyRecord::current("ARS", 32, TWO, "Argentine peso", "$"),
    CurrencyRecord::current("AUD", 36, TWO, "Australian dollar", "$"),
    CurrencyRecord::current("AWG", 533, TWO, "Aruban florin", "ƒ"),
    CurrencyRecord::current("AZN", 944, TWO, "Azerbaijani manat", "₼"),
    CurrencyRecord::current("BAM", 977, TWO, "Bosnia and Herzegovina convertible mark", "KM"),
    CurrencyRecord::current("BBD", 52, TWO, "Barbados dollar", "$"),
    CurrencyRecord::current("BDT", 50, TWO, "Bangladeshi taka", "৳"),
    CurrencyRecord::current("BGN", 975, TWO, "Bulgarian lev", "лв."),
    CurrencyRecord::current("BHD", 48, THREE, "Bahraini dinar", "BD"),
    CurrencyRecord::current("BIF", 108, ZERO, "Burundian franc", "FBu"),
    CurrencyRecord::current("BMD", 60, TWO, "Bermudian dollar", "$"),
    CurrencyRecord::current("BND", 96, TWO, "Brunei dollar", "$"),
    CurrencyRecord::current("BOB", 68, TWO, "Boliviano", "Bs."),
    CurrencyRecord::current("BOV", 984, TWO, "Bolivian Mvdol (funds code)", "¤"),
    CurrencyRecord::current("BRL", 986, TWO, "Brazilian real", "R$"),
    CurrencyRecord::current("BSD", 44, TWO, "Bahamian dollar", "$"),
    CurrencyRecord::current("BTN", 64, TWO, "Bhutanese ngultrum", "Nu."),
    CurrencyRecord::current("BWP", 72, TWO, "Botswana pula", "P"),
    CurrencyRecord::since("BYN", 933, TWO, "Belarusian ruble", "Br", (2016, 7, 1)),
    CurrencyRecord::current("BZD", 84, TWO, "Belize dollar", "BZ$"),
    CurrencyRecord::current("CAD", 124, TWO, "Canadian dollar", "$"),
    CurrencyRecord::current("CDF", 976, TWO, "Congolese franc", "FC"),
    CurrencyRecord::current("CHE", 947, TWO, "WIR Euro (complementary currency)", "¤"),
    CurrencyRecord::current("CHF", 756, TWO, "Swiss franc", "Fr."),
    CurrencyRecord::current("CHW", 948, TWO, "WIR Franc (complementary currency)", "¤"),
    CurrencyRecord::current("CLF", 990, FOUR, "Unidad de Fomento (funds code)", "UF"),
    CurrencyRecord::current("CLP", 152, ZERO, "Chilean peso", "$"),
    CurrencyRecord::current("CNY", 156, TWO, "Chinese yuan", "¥"),
    CurrencyRecord::current("COP", 170, TWO, "Colombian peso", "$"),
    CurrencyRecord::current("COU", 970, TWO, "Unidad de Valor Real", "¤"),
    CurrencyRecord::current("CRC", 188, TWO, "Costa Rican colon", "₡"),
    CurrencyRecord::current("CUC", 931, TWO, "Cuban convertible peso", "CUC$"),
    CurrencyRecord::current("CUP", 192, TWO, "Cuban peso", "$"),
    CurrencyRecord::current("CVE", 132, TWO, "Cape Verde escudo", "$"),
    CurrencyRecord::current("CZK", 203, TWO, "Czech koruna", "Kč"),
    CurrencyRecord::current("DJF", 262, ZERO, "Djiboutian franc", "Fdj"),
    CurrencyRecord::current("DKK", 208, TWO, "Danish krone", "kr."),
    CurrencyRecord::current("DOP", 214, TWO, "Dominican peso", "RD$"),
    CurrencyRecord::current("DZD", 12, TWO, "Algerian dinar", "د.ج"),
    CurrencyRecord::current("EGP", 818, TWO, "Egyptian pound", "LE"),
    CurrencyRecord::current("ERN", 232, TWO, "Eritrean nakfa", "ERN"),
    CurrencyRecord::current("ETB", 230, TWO, "Ethiopian birr", "Br"),
    CurrencyRecord::current("EUR", 978, TWO, "Euro", "€"),
    CurrencyRecord::current("FJD", 242, TWO, "Fiji dollar", "$"),
    CurrencyRecord::current("FKP", 238, TWO, "Falkland Islands pound", "£"),
    CurrencyRecord::current("GBP", 826, TWO, "British pound", "£"),
    CurrencyRecord::current("GEL", 981, TWO, "Georgian lari", "₾"),
    CurrencyRecord::since("GHS", 936, TWO, "Ghanaian cedi", "GH¢", (2007, 7, 1)),
    CurrencyRecord::current("GIP", 292, TWO, "Gibraltar pound", "£"),
    CurrencyRecord::current("GMD", 270, TWO, "Gambian dalasi", "D"),
    CurrencyRecord::current("GNF", 324, ZERO, "Guinean franc", "FG"),
    CurrencyRecord::current("GTQ", 320, TWO, "Guatemalan quetzal", "Q"),
    CurrencyRecord::current("GYD", 328, TWO, "Guyanese dollar", "$"),
    CurrencyRecord::current("HKD", 344, TWO, "Hong Kong dollar", "HK$"),
    CurrencyRecord::current("HNL", 340, TWO, "Honduran lempira", "L"),
    CurrencyRecord::current("HTG", 332, TWO, "Haitian gourde", "G"),
    CurrencyRecord::current("HUF", 348, TWO, "Hungarian forint", "Ft"),
    CurrencyRecord::current("IDR", 360, TWO, "Indonesian rupiah", "Rp"),
    CurrencyRecord::current("ILS", 376, TWO, "Israeli new shekel", "₪"),
    CurrencyRecord::current("INR", 356, TWO, "Indian rupee", "₹"),
    CurrencyRecord::current("IQD", 368, THREE, "Iraqi dinar", "ع.د"),
    CurrencyRecord::current("IRR", 364, TWO, "Iranian rial", "﷼"),
    CurrencyRecord::current("ISK", 352, ZERO, "Icelandic króna", "kr"),
    CurrencyRecord::current("JMD", 388, TWO, "Jamaican dollar", "J$"),
    CurrencyRecord::current("JOD", 400, THREE, "Jordanian dinar", "JD"),
    CurrencyRecord::current("JPY", 392, ZERO, "Japanese yen", "¥"),
    CurrencyRecord::current("KES", 404, TWO, "Kenyan shilling", "KSh"),
    CurrencyRecord::current("KGS", 417, TWO, "Kyrgyzstani som", "сом"),
    CurrencyRecord::current("KHR", 116, TWO, "Cambodian riel", "៛"),
    CurrencyRecord::current("KMF", 174, ZERO, "Comoro franc", "CF"),
    CurrencyRecord::current("KPW", 408, TWO, "North Korean won", "₩"),
    CurrencyRecord::current("KRW", 410, ZERO, "South Korean won", "₩"),
    CurrencyRecord::current("KWD", 414, THREE, "Kuwaiti dinar", "د.ك"),
    CurrencyRecord::current("KYD", 136, TWO, "Cayman Islands dollar", "$"),
    CurrencyRecord::current("KZT", 398, TWO, "Kazakhstani tenge", "₸"),
    CurrencyRecord::current("LAK", 418, TWO, "Lao kip", "₭"),
    CurrencyRecord::current("LBP", 422, TWO, "Lebanese pound", "ل.ل"),
    CurrencyRecord::current("LKR", 144, TWO, "Sri Lankan rupee", "Rs"),
    CurrencyRecord::current("LRD", 430, TWO, "Liberian dollar", "$"),
    CurrencyRecord::current("LSL", 426, TWO, "Lesotho loti", "L"),
    CurrencyRecord::current("LYD", 434, THREE, "Libyan dinar", "ل.د"),
    CurrencyRecord::current("MAD", 504, TWO, "Moroccan dirham", "د.م."),
    CurrencyRecord::current("MDL", 498, TWO, "Moldovan leu", "L"),
    CurrencyRecord::current("MGA", 969, FIFTH, "Malagasy ariary", "Ar"),
    CurrencyRecord::current("MKD", 807, TWO, "Macedonian denar", "ден"),
    CurrencyRecord::current("MMK", 104, TWO, "Myanma kyat", "K"),
    CurrencyRecord::current("MNT", 496, TWO, "Mongolian tugrik", "₮"),
    CurrencyRecord::current("MOP", 446, TWO, "Macanese pataca", "MOP$"),
    CurrencyRecord::since("MRU", 929, FIFTH, "Mauritanian ouguiya", "UM", (2018, 1, 1)),
    CurrencyRecord::current("MUR", 480, TWO, "Mauritian rupee", "Rs"),
    CurrencyRecord::current("MVR", 462, TWO, "Maldivian rufiyaa", "Rf"),
    CurrencyRecord::current("MWK", 454, TWO, "Malawian kwacha", "MK"),
    CurrencyRecord::current("MXN", 484, TWO, "Mexican peso", "$"),
    CurrencyRecord::current("MXV", 979, TWO, "Mexican Unidad de Inversion (funds code)", "¤"),
    CurrencyRecord::current("MYR", 458, TWO, "Malaysian ringgit", "RM"),
    CurrencyRecord::since("MZN", 943, TWO, "Mozambican metical", "MTn", (2006, 7, 1)),
    CurrencyRecord::current("NAD", 516, TWO, "Namibian dollar", "N$"),
    CurrencyRecord::current("NGN", 566, TWO, "Nigerian naira", "₦"),
    CurrencyRecord::current("NIO", 558, TWO, "Nicaraguan córdoba", "C$"),
    CurrencyRecord::current("NOK", 578, TWO, "Norwegian krone", "kr"),
    CurrencyRecord::current("NPR", 524, TWO, "Nepalese rupee", "Rs"),
    CurrencyRecord::current("NZD", 554, TWO, "New Zealand dollar", "$"),
    CurrencyRecord::current("OMR", 512, THREE, "Omani rial", "ر.ع."),
    CurrencyRecord::current("PAB", 590, TWO, "Panamanian balboa", "B/."),
    CurrencyRecord::current("PEN", 604, TWO, "Peruvian sol", "S/."),
    CurrencyRecord::current("PGK", 598, TWO, "Papua New Guinean kina", "K"),
    CurrencyRecord::current("PHP", 608, TWO, "Philippine peso", "₱"),
    CurrencyRecord::current("PKR", 586, TWO, "Pakistani rupee", "Rs"),
    CurrencyRecord::current("PLN", 985, TWO, "Polish złoty", "zł"),
    CurrencyRecord::current("PYG", 600, ZERO, "Paraguayan guaraní", "₲"),
    CurrencyRecord::current("QAR", 634, TWO, "Qatari riyal", "ر.ق"),
    CurrencyRecord::since("RON", 946, TWO, "Romanian leu", "lei", (2005, 7, 1)),
    CurrencyRecord::since("RSD", 941, TWO, "Serbian dinar", "РСД", (2006, 10, 25)),
    CurrencyRecord::current("RUB", 643, TWO, "Russian ruble", "₽"),
    CurrencyRecord::current("RWF", 646, ZERO, "Rwandan franc", "RFw"),
    CurrencyRecord::current("SAR", 682, TWO, "Saudi riyal", "ر.س"),
    CurrencyRecord::current("SBD", 90, TWO, "Solomon Islands dollar", "SI$"),
    CurrencyRecord::current("SCR", 690, TWO, "Seychelles rupee", "SR"),
    CurrencyRecord::since("SDG", 938, TWO, "Sudanese pound", "ج.س.", (2007, 1, 10)),
    CurrencyRecord::current("SEK", 752, TWO, "Swedish krona", "kr"),
    CurrencyRecord::current("SGD", 702, TWO, "Singapore dollar", "S$"),
    CurrencyRecord::current("SHP", 654, TWO, "Saint Helena pound", "£"),
    CurrencyRecord::since("SLE", 925, TWO, "Sierra Leonean leone", "Le", (2022, 4, 1)),
    CurrencyRecord::current("SOS", 706, TWO, "Somali shilling", "S"),
    CurrencyRecord::current("SRD", 968, TWO, "Surinamese dollar", "$"),
    CurrencyRecord::current("SSP", 728, TWO, "South Sudanese pound", "£"),
    CurrencyRecord::since("STN", 930, TWO, "São Tomé and Príncipe dobra", "Db", (2018, 1, 1)),
    CurrencyRecord::current("SVC", 222, TWO, "Salvadoran colón", "₡"),
    CurrencyRecord::current("SYP", 760, TWO, "Syrian pound", "£S"),
    CurrencyRecord::current("SZL", 748, TWO, "Swazi lilangeni", "L"),
    CurrencyRecord::current("THB", 764, TWO, "Thai baht", "฿"),
    CurrencyRecord::current("TJS", 972, TWO, "Tajikistani somoni", "смн"),
    CurrencyRecord::since("TMT", 934, TWO, "Turkmenistani manat", "m", (2009, 1, 1)),
    CurrencyRecord::current("TND", 788, THREE, "Tunisian dinar", "د.ت"),
    CurrencyRecord::current("TOP", 776, TWO, "Tongan paʻanga", "T$"),
    CurrencyRecord::since("TRY", 949, TWO, "Turkish lira", "₺", (2005, 1, 1)),
    CurrencyRecord::current("TTD", 780, TWO, "Trinidad and Tobago dollar", "$"),
    CurrencyRecord::current("TWD", 901, TWO, "New Taiwan dollar", "NT$"),
    CurrencyRecord::current("TZS", 834, TWO, "Tanzanian shilling", "TSh"),
    CurrencyRecord::current("UAH", 980, TWO, "Ukrainian hryvnia", "₴"),
    CurrencyRecord::current("UGX", 800, ZERO, "Ugandan shilling", "USh"),
    CurrencyRecord::current("USD", 840, TWO, "United States dollar", "$"),
    CurrencyRecord::current("USN", 997, TWO, "United States dollar (next day) (funds code)", "$"),
    CurrencyRecord::current("UYI", 940, ZERO, "Uruguay Peso en Unidades Indexadas (URUIURUI) (funds code)", "¤"),
    CurrencyRecord::current("UYU", 858, TWO, "Uruguayan peso", "$"),
    CurrencyRecord::since("UYW", 927, FOUR, "Unidad previsional", "¤", (2018, 8, 29)),
    CurrencyRecord::current("UZS", 860, TWO, "Uzbekistan som", "лв"),
    CurrencyRecord::since("VED", 926, TWO, "Venezuelan digital bolívar", "Bs.", (2021, 10, 1)),
    CurrencyRecord::since("VES", 928, TWO, "Venezuelan sovereign bolívar", "Bs.S.", (2018, 8, 20)),
    CurrencyRecord::current("VND", 704, ZERO, "Vietnamese đồng", "₫"),
    CurrencyRecord::current("VUV", 548, ZERO, "Vanuatu vatu", "VT"),
    CurrencyRecord::current("WST", 882, TWO, "Samoan tala", "WS$"),
    CurrencyRecord::current("XAF", 950, ZERO, "CFA franc BEAC", "FCFA"),
    CurrencyRecord::current("XAG", 961, NA, "Silver (one troy ounce)", "¤"),
    CurrencyRecord::current("XAU", 959, NA, "Gold (one troy ounce)", "¤"),
    CurrencyRecord::current("XBA", 955, NA, "European Composite Unit (EURCO) (bond market unit)", "¤"),
    CurrencyRecord::current("XBB", 956, NA, "European Monetary Unit (E.M.U.-6) (bond market unit)", "¤"),
    CurrencyRecord::current("XBC", 957, NA, "European Unit of Account 9 (E.U.A.-9) (bond market unit)", "¤"),
    CurrencyRecord::current("XBD", 958, NA, "European Unit of Account 17 (E.U.A.-17) (bond market unit)", "¤"),
    CurrencyRecord::current("XCD", 951, TWO, "East Caribbean dollar", "$"),
    CurrencyRecord::since("XCG", 532, TWO, "Caribbean guilder", "Cg", (2025, 3, 31)),
    CurrencyRecord::current("XDR", 960, NA, "Special drawing rights", "¤"),
    CurrencyRecord::current("XOF", 952, ZERO, "CFA franc BCEAO", "CFA"),
    CurrencyRecord::current("XPD", 964, NA, "Palladium (one troy ounce)", "¤"),
    CurrencyRecord::current("XPF", 953, ZERO, "CFP franc", "F"),
    CurrencyRecord::current("XPT", 962, NA, "Platinum (one troy ounce)", "¤"),
    CurrencyRecord::current("XSU", 994, NA, "SUCRE", "¤"),
    CurrencyRecord::current("XTS", 963, NA, "Code reserved for testing purposes", "¤"),
    CurrencyRecord::current("XUA", 965, NA, "ADB Unit of Account", "¤"),
    CurrencyRecord::current("XXX", 999, NA, "No currency", "¤"),
    CurrencyRecord::current("YER", 886, TWO, "Yemeni rial", "﷼"),
    CurrencyRecord::current("ZAR", 710, TWO, "South African rand", "R"),
    CurrencyRecord::current("ZMW", 967, TWO, "Zambian kwacha", "ZK"),
    CurrencyRecord::since("ZWG", 924, TWO, "Zimbabwe Gold", "ZiG", (2024, 6, 25)),
];

static CURRENT_BY_CODE: Lazy<HashMap<&'static str, &'static CurrencyRecord>> =
    Lazy::new(|| CURRENT.iter().map(|record| (record.code, record)).collect());

/// Finds a current ISO-4217 record by its (uppercase) code.
pub(crate) fn find_current(code: &str) -> Option<&'static CurrencyRecord> {
    CURRENT_BY_CODE.get(code).copied()
}
