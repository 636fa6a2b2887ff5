//! Historic ISO-4217 currencies, kept for old amounts and archived data.
//!
//! Each row carries the window `(introduced, expired)` during which the
//! currency was legal tender. Codes without a numeric code use 0.

use coinage_shared::MinorUnit;

use super::iso4217::CurrencyRecord;

const TWO: MinorUnit = MinorUnit::TWO;
const ZERO: MinorUnit = MinorUnit::ZERO;
const THREE: MinorUnit = MinorUnit::THREE;
const FIFTH: MinorUnit = MinorUnit::NonDecimalFifth;
const NA: MinorUnit = MinorUnit::NotApplicable;

/// Historic ISO-4217 currencies.
pub(crate) static HISTORIC: &[CurrencyRecord] = &[
    CurrencyRecord::historic("ADF", 0, TWO, "Andorran franc", "Fr", (1960, 1, 1), (2002, 2, 17)),
    CurrencyRecord::historic("ADP", 20, ZERO, "Andorran peseta", "Pts", (1869, 1, 1), (2002, 2, 28)),
    CurrencyRecord::historic("AFA", 4, TWO, "Afghan afghani", "؋", (1925, 1, 1), (2003, 1, 2)),
    CurrencyRecord::historic("AOK", 24, ZERO, "Angolan kwanza", "Kz", (1977, 1, 8), (1990, 9, 24)),
    CurrencyRecord::historic("AON", 24, ZERO, "Angolan novo kwanza", "Kz", (1990, 9, 25), (2000, 2, 1)),
    CurrencyRecord::historic("AOR", 982, ZERO, "Angolan kwanza reajustado", "Kz", (1995, 7, 1), (2000, 2, 1)),
    CurrencyRecord::historic("ARA", 32, TWO, "Argentine austral", "₳", (1985, 6, 15), (1991, 12, 31)),
    CurrencyRecord::historic("ARP", 32, TWO, "Argentine peso argentino", "$a", (1983, 6, 6), (1985, 6, 14)),
    CurrencyRecord::historic("ATS", 40, TWO, "Austrian schilling", "öS", (1945, 1, 1), (2002, 2, 28)),
    CurrencyRecord::historic("AZM", 31, TWO, "Azerbaijani manat", "₼", (1992, 8, 15), (2006, 1, 1)),
    CurrencyRecord::historic("BAD", 70, TWO, "Bosnia and Herzegovina dinar", "дин.", (1992, 7, 1), (1997, 12, 31)),
    CurrencyRecord::historic("BEC", 993, TWO, "Belgian convertible franc (funds code)", "¤", (1970, 1, 1), (1990, 1, 1)),
    CurrencyRecord::historic("BEF", 56, TWO, "Belgian franc", "fr.", (1832, 1, 1), (2002, 2, 28)),
    CurrencyRecord::historic("BEL", 992, TWO, "Belgian financial franc (funds code)", "¤", (1970, 1, 1), (1990, 1, 1)),
    CurrencyRecord::historic("BGL", 100, TWO, "Bulgarian lev A/99", "лв.", (1962, 1, 1), (1999, 7, 5)),
    CurrencyRecord::historic("BOP", 68, TWO, "Bolivian peso", "$b.", (1963, 1, 1), (1986, 12, 31)),
    CurrencyRecord::historic("BRB", 76, TWO, "Brazilian cruzeiro", "Cr$", (1970, 1, 1), (1986, 2, 28)),
    CurrencyRecord::historic("BRC", 76, TWO, "Brazilian cruzado", "Cz$", (1986, 3, 1), (1989, 1, 15)),
    CurrencyRecord::historic("BRE", 76, TWO, "Brazilian cruzeiro", "Cr$", (1990, 3, 15), (1993, 8, 1)),
    CurrencyRecord::historic("BRN", 76, TWO, "Brazilian cruzado novo", "NCz$", (1989, 1, 16), (1990, 3, 15)),
    CurrencyRecord::historic("BRR", 987, TWO, "Brazilian cruzeiro real", "CR$", (1993, 8, 1), (1994, 6, 30)),
    CurrencyRecord::historic("BYB", 112, TWO, "Belarusian ruble", "Br", (1992, 1, 1), (1999, 12, 31)),
    CurrencyRecord::historic("BYR", 974, ZERO, "Belarusian ruble", "Br", (2000, 1, 1), (2016, 6, 30)),
    CurrencyRecord::historic("CNX", 0, TWO, "Chinese People's Bank dollar", "¥", (1979, 1, 1), (1998, 12, 31)),
    CurrencyRecord::historic("CSD", 891, TWO, "Serbian dinar", "дин.", (2003, 7, 3), (2006, 12, 31)),
    CurrencyRecord::historic("CSK", 200, TWO, "Czechoslovak koruna", "Kčs", (1919, 4, 10), (1993, 2, 8)),
    CurrencyRecord::historic("CYP", 196, TWO, "Cypriot pound", "£", (1879, 1, 1), (2007, 12, 31)),
    CurrencyRecord::historic("DDM", 278, TWO, "East German mark", "M", (1948, 6, 21), (1990, 6, 30)),
    CurrencyRecord::historic("DEM", 276, TWO, "German mark", "DM", (1948, 6, 21), (2001, 12, 31)),
    CurrencyRecord::historic("ECS", 218, ZERO, "Ecuadorian sucre", "S/.", (1884, 1, 1), (2000, 9, 9)),
    CurrencyRecord::historic("ECV", 983, TWO, "Ecuador Unidad de Valor Constante (funds code)", "¤", (1993, 1, 1), (2000, 9, 9)),
    CurrencyRecord::historic("EEK", 233, TWO, "Estonian kroon", "kr", (1992, 1, 1), (2010, 12, 31)),
    CurrencyRecord::historic("ESA", 996, TWO, "Spanish peseta (account A)", "Pta", (1978, 1, 1), (1981, 12, 31)),
    CurrencyRecord::historic("ESB", 995, TWO, "Spanish peseta (account B)", "Pta", (1975, 1, 1), (1994, 12, 31)),
    CurrencyRecord::historic("ESP", 724, ZERO, "Spanish peseta", "Pta", (1869, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("FIM", 246, TWO, "Finnish markka", "mk", (1860, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("FRF", 250, TWO, "French franc", "₣", (1960, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("GEK", 268, ZERO, "Georgian kuponi", "ლ", (1993, 4, 5), (1995, 9, 24)),
    CurrencyRecord::historic("GHC", 288, ZERO, "Ghanaian cedi", "₵", (1967, 1, 1), (2007, 6, 30)),
    CurrencyRecord::historic("GNE", 324, ZERO, "Guinean syli", "FG", (1971, 1, 1), (1985, 12, 31)),
    CurrencyRecord::historic("GQE", 226, ZERO, "Equatorial Guinean ekwele", "¤", (1975, 1, 1), (1986, 12, 31)),
    CurrencyRecord::historic("GRD", 300, ZERO, "Greek drachma", "₯", (1954, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("GWP", 624, TWO, "Guinea-Bissau peso", "$G", (1975, 1, 1), (1997, 4, 30)),
    CurrencyRecord::historic("HRD", 191, TWO, "Croatian dinar", "HRD", (1991, 12, 23), (1994, 5, 30)),
    CurrencyRecord::historic("HRK", 191, TWO, "Croatian kuna", "kn", (1994, 5, 30), (2022, 12, 31)),
    CurrencyRecord::historic("IEP", 372, TWO, "Irish pound", "£", (1938, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("ILP", 376, THREE, "Israeli lira", "I£", (1948, 1, 1), (1980, 2, 23)),
    CurrencyRecord::historic("ILR", 376, TWO, "Israeli shekel", "IS", (1980, 2, 24), (1985, 12, 31)),
    CurrencyRecord::historic("ITL", 380, ZERO, "Italian lira", "₤", (1861, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("LTL", 440, TWO, "Lithuanian litas", "Lt", (1993, 1, 1), (2014, 12, 31)),
    CurrencyRecord::historic("LTT", 440, TWO, "Lithuanian talonas", "Lt", (1992, 1, 1), (1993, 12, 31)),
    CurrencyRecord::historic("LUC", 989, TWO, "Luxembourg convertible franc (funds code)", "¤", (1970, 1, 1), (1990, 3, 5)),
    CurrencyRecord::historic("LUF", 442, TWO, "Luxembourg franc", "F", (1944, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("LUL", 988, TWO, "Luxembourg financial franc (funds code)", "¤", (1970, 1, 1), (1990, 3, 5)),
    CurrencyRecord::historic("LVL", 428, TWO, "Latvian lats", "Ls", (1992, 1, 1), (2013, 12, 31)),
    CurrencyRecord::historic("LVR", 428, TWO, "Latvian rublis", "Rbl", (1992, 5, 7), (1993, 10, 17)),
    CurrencyRecord::historic("MCF", 0, TWO, "Monegasque franc", "fr", (1960, 1, 1), (2002, 2, 17)),
    CurrencyRecord::historic("MGF", 450, TWO, "Malagasy franc", "FMG", (1963, 7, 1), (2004, 12, 31)),
    CurrencyRecord::historic("MKN", 807, TWO, "Old Macedonian denar A/93", "ден", (1992, 1, 1), (1993, 12, 31)),
    CurrencyRecord::historic("MLF", 466, ZERO, "Mali franc", "MAF", (1962, 1, 1), (1984, 12, 31)),
    CurrencyRecord::historic("MRO", 478, FIFTH, "Mauritanian ouguiya", "UM", (1973, 6, 29), (2017, 12, 31)),
    CurrencyRecord::historic("MTL", 470, TWO, "Maltese lira", "₤", (1972, 5, 26), (2007, 12, 31)),
    CurrencyRecord::historic("MXP", 484, TWO, "Mexican peso", "$", (1863, 1, 1), (1992, 12, 31)),
    CurrencyRecord::historic("MZE", 508, TWO, "Mozambican escudo", "Esc", (1914, 1, 1), (1980, 6, 16)),
    CurrencyRecord::historic("MZM", 508, TWO, "Mozambican metical", "MT", (1980, 6, 16), (2006, 6, 30)),
    CurrencyRecord::historic("NIC", 558, TWO, "Nicaraguan córdoba", "C$", (1988, 2, 15), (1990, 10, 31)),
    CurrencyRecord::historic("NLG", 528, TWO, "Dutch guilder", "ƒ", (1810, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("PEH", 0, TWO, "Peruvian old sol", "S./", (1863, 1, 1), (1985, 2, 1)),
    CurrencyRecord::historic("PEI", 604, TWO, "Peruvian inti", "I/.", (1985, 2, 1), (1991, 10, 1)),
    CurrencyRecord::historic("PLZ", 616, TWO, "Polish zloty A/94", "zł", (1950, 10, 30), (1994, 12, 31)),
    CurrencyRecord::historic("PTE", 620, ZERO, "Portuguese escudo", "$", (1911, 5, 22), (2001, 12, 31)),
    CurrencyRecord::historic("RHD", 716, TWO, "Rhodesian dollar", "$", (1970, 2, 17), (1980, 4, 17)),
    CurrencyRecord::historic("ROK", 642, ZERO, "Romanian leu A/52", "lei", (1947, 8, 15), (1952, 1, 27)),
    CurrencyRecord::historic("ROL", 642, TWO, "Romanian leu A/05", "lei", (1952, 1, 28), (2005, 6, 30)),
    CurrencyRecord::historic("RUR", 810, TWO, "Russian ruble A/97", "р.", (1992, 1, 1), (1997, 12, 31)),
    CurrencyRecord::historic("SDD", 736, TWO, "Sudanese dinar", "LSd", (1992, 6, 8), (2007, 6, 30)),
    CurrencyRecord::historic("SDP", 736, TWO, "Sudanese old pound", "ج.س.", (1956, 1, 1), (1992, 6, 8)),
    CurrencyRecord::historic("SIT", 705, TWO, "Slovenian tolar", "SIT", (1991, 10, 8), (2006, 12, 31)),
    CurrencyRecord::historic("SKK", 703, TWO, "Slovak koruna", "Sk", (1993, 2, 8), (2008, 12, 31)),
    CurrencyRecord::historic("SLL", 694, TWO, "Sierra Leonean leone", "Le", (1964, 8, 4), (2023, 12, 31)),
    CurrencyRecord::historic("SML", 0, ZERO, "San Marinese lira", "₤", (1864, 1, 1), (2001, 12, 31)),
    CurrencyRecord::historic("SRG", 740, TWO, "Suriname guilder", "ƒ", (1942, 1, 1), (2003, 12, 31)),
    CurrencyRecord::historic("STD", 678, TWO, "São Tomé and Príncipe dobra", "Db", (1977, 1, 1), (2017, 12, 31)),
    CurrencyRecord::historic("SUR", 810, TWO, "Soviet Union ruble", "руб", (1961, 1, 1), (1991, 12, 31)),
    CurrencyRecord::historic("TJR", 762, ZERO, "Tajikistani ruble", "TJR", (1995, 5, 10), (2000, 10, 30)),
    CurrencyRecord::historic("TMM", 795, TWO, "Turkmenistani manat", "T", (1993, 11, 1), (2008, 12, 31)),
    CurrencyRecord::historic("TPE", 626, ZERO, "Portuguese Timorese escudo", "$", (1959, 1, 1), (1976, 12, 31)),
    CurrencyRecord::historic("TRL", 792, ZERO, "Turkish lira A/05", "₤", (1843, 1, 1), (2005, 12, 31)),
    CurrencyRecord::historic("UAK", 804, TWO, "Ukrainian karbovanets", "крб.", (1992, 10, 1), (1996, 9, 1)),
    CurrencyRecord::historic("UGS", 800, ZERO, "Ugandan shilling A/87", "USh", (1966, 8, 15), (1987, 5, 15)),
    CurrencyRecord::historic("USS", 998, TWO, "United States dollar (same day) (funds code)", "$", (1995, 1, 1), (2014, 3, 28)),
    CurrencyRecord::historic("UYN", 858, TWO, "Uruguay old peso", "$", (1896, 1, 1), (1975, 7, 1)),
    CurrencyRecord::historic("UYP", 858, TWO, "Uruguay peso", "$", (1975, 7, 1), (1993, 3, 1)),
    CurrencyRecord::historic("VAL", 0, ZERO, "Vatican lira", "₤", (1929, 1, 1), (2002, 2, 28)),
    CurrencyRecord::historic("VEB", 862, TWO, "Venezuelan bolívar", "Bs.", (1879, 3, 31), (2007, 12, 31)),
    CurrencyRecord::historic("VEF", 937, TWO, "Venezuelan bolívar fuerte", "Bs.F", (2008, 1, 1), (2018, 8, 20)),
    CurrencyRecord::historic("VNN", 704, ZERO, "Old Vietnamese dong", "₫", (1978, 5, 3), (1985, 9, 14)),
    CurrencyRecord::historic("XEU", 954, NA, "European Currency Unit", "ECU", (1979, 3, 13), (1998, 12, 31)),
    CurrencyRecord::historic("XFO", 0, NA, "Gold franc (special settlement currency)", "¤", (1803, 1, 1), (2003, 12, 31)),
    CurrencyRecord::historic("XFU", 0, NA, "UIC franc (special settlement currency)", "¤", (1921, 1, 1), (2013, 11, 7)),
    CurrencyRecord::historic("YDD", 720, THREE, "South Yemeni dinar", "YDD", (1965, 1, 1), (1996, 6, 11)),
    CurrencyRecord::historic("YUD", 890, TWO, "Yugoslav dinar", "дин.", (1966, 1, 1), (1989, 12, 31)),
    CurrencyRecord::historic("YUM", 891, TWO, "Yugoslav dinar", "дин.", (1994, 1, 24), (2003, 7, 2)),
    CurrencyRecord::historic("YUN", 890, TWO, "Yugoslav dinar", "дин.", (1990, 1, 1), (1992, 6, 30)),
    CurrencyRecord::historic("ZAL", 991, TWO, "South African financial rand (funds code)", "R", (1985, 9, 1), (1995, 3, 13)),
    CurrencyRecord::historic("ZMK", 894, TWO, "Zambian kwacha", "ZK", (1968, 1, 16), (2012, 12, 31)),
    CurrencyRecord::historic("ZRN", 180, TWO, "Zairean new zaire", "Ƶ", (1993, 1, 1), (1997, 12, 31)),
    CurrencyRecord::historic("ZRZ", 180, THREE, "Zairean zaire", "Ƶ", (1967, 1, 1), (1993, 12, 31)),
    CurrencyRecord::historic("ZWC", 716, TWO, "Rhodesian dollar", "$", (1970, 2, 17), (1980, 4, 17)),
    CurrencyRecord::historic("ZWD", 716, TWO, "Zimbabwean dollar A/06", "Z$", (1980, 4, 18), (2006, 7, 31)),
    CurrencyRecord::historic("ZWL", 932, TWO, "Zimbabwean dollar A/10", "$", (2009, 2, 2), (2024, 8, 31)),
    CurrencyRecord::historic("ZWN", 942, TWO, "Zimbabwean dollar A/08", "Z$", (2006, 8, 1), (2008, 7, 31)),
    CurrencyRecord::historic("ZWR", 935, TWO, "Zimbabwean dollar A/09", "Z$", (2008, 8, 1), (2009, 2, 2)),
];
