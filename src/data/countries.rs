//! Country-code top-level domains and the country taxonomy.

use super::{CountryEntry, Region};

/// Country-code TLDs with their country and region.
///
/// `gov` is listed alongside `us`: both resolve to the United States.
pub const COUNTRIES: &[CountryEntry] = &[
    country("ae", "United Arab Emirates", Region::MiddleEastAndNorthAfrica),
    country("af", "Afghanistan", Region::SouthAndSouthEastAsia),
    country("al", "Albania", Region::EasternEurope),
    country("ao", "Angola", Region::SubSaharanAfrica),
    country("ar", "Argentina", Region::LatinAmerica),
    country("at", "Austria", Region::WesternEurope),
    country("au", "Australia", Region::WesternOffshoots),
    country("ba", "Bosnia and Herzegovina", Region::EasternEurope),
    country("bb", "Barbados", Region::LatinAmerica),
    country("bd", "Bangladesh", Region::SouthAndSouthEastAsia),
    country("be", "Belgium", Region::WesternEurope),
    country("bf", "Burkina Faso", Region::SubSaharanAfrica),
    country("bg", "Bulgaria", Region::EasternEurope),
    country("bh", "Bahrain", Region::MiddleEastAndNorthAfrica),
    country("bi", "Burundi", Region::SubSaharanAfrica),
    country("bj", "Benin", Region::SubSaharanAfrica),
    country("bo", "Bolivia", Region::LatinAmerica),
    country("br", "Brazil", Region::LatinAmerica),
    country("bw", "Botswana", Region::SubSaharanAfrica),
    country("by", "Belarus", Region::EasternEurope),
    country("ca", "Canada", Region::WesternOffshoots),
    country("cf", "Central African Republic", Region::SubSaharanAfrica),
    country("ch", "Switzerland", Region::WesternEurope),
    country("ci", "Ivory Coast", Region::SubSaharanAfrica),
    country("cl", "Chile", Region::LatinAmerica),
    country("cm", "Cameroon", Region::SubSaharanAfrica),
    country("cr", "Costa Rica", Region::LatinAmerica),
    country("cy", "Cyprus", Region::EasternEurope),
    country("de", "Germany", Region::WesternEurope),
    country("dk", "Denmark", Region::WesternEurope),
    country("dm", "Dominica", Region::LatinAmerica),
    country("do", "Dominican Republic", Region::LatinAmerica),
    country("dz", "Algeria", Region::MiddleEastAndNorthAfrica),
    country("ec", "Ecuador", Region::LatinAmerica),
    country("ee", "Estonia", Region::EasternEurope),
    country("eg", "Egypt", Region::MiddleEastAndNorthAfrica),
    country("es", "Spain", Region::WesternEurope),
    country("et", "Ethiopia", Region::SubSaharanAfrica),
    country("fi", "Finland", Region::WesternEurope),
    country("fr", "France", Region::WesternEurope),
    country("ge", "Georgia", Region::EasternEurope),
    country("gh", "Ghana", Region::SubSaharanAfrica),
    country("gi", "Gibraltar (United Kingdom)", Region::WesternEurope),
    country("gl", "Greenland (Kingdom of Denmark)", Region::WesternEurope),
    country("gn", "Guinea", Region::SubSaharanAfrica),
    country("gq", "Equatorial Guinea", Region::SubSaharanAfrica),
    country("gr", "Greece", Region::WesternEurope),
    country("gt", "Guatemala", Region::LatinAmerica),
    country("gw", "Guinea-Bissau", Region::SubSaharanAfrica),
    country("hk", "Hong Kong", Region::EastAsia),
    country("hn", "Honduras", Region::LatinAmerica),
    country("hr", "Croatia", Region::EasternEurope),
    country("ht", "Haiti", Region::LatinAmerica),
    country("hu", "Hungary", Region::EasternEurope),
    country("id", "Indonesia", Region::SouthAndSouthEastAsia),
    country("ie", "Ireland", Region::WesternEurope),
    country("il", "Israel", Region::MiddleEastAndNorthAfrica),
    country("in", "India", Region::SouthAndSouthEastAsia),
    country("iq", "Iraq", Region::MiddleEastAndNorthAfrica),
    country("ir", "Iran", Region::MiddleEastAndNorthAfrica),
    country("jm", "Jamaica", Region::LatinAmerica),
    country("jo", "Jordan", Region::MiddleEastAndNorthAfrica),
    country("jp", "Japan", Region::EastAsia),
    country("ke", "Kenya", Region::SubSaharanAfrica),
    country("kh", "Cambodia", Region::SouthAndSouthEastAsia),
    country("km", "Comoros", Region::SubSaharanAfrica),
    country("kn", "Saint Kitts and Nevis", Region::LatinAmerica),
    country("kp", "North Korea", Region::EastAsia),
    country("kr", "South Korea", Region::EastAsia),
    country("kw", "Kuwait", Region::MiddleEastAndNorthAfrica),
    country("ky", "Cayman Islands (United Kingdom)", Region::LatinAmerica),
    country("kz", "Kazakhstan", Region::EasternEurope),
    country("lb", "Lebanon", Region::MiddleEastAndNorthAfrica),
    country("lc", "Saint Lucia", Region::LatinAmerica),
    country("li", "Liechtenstein", Region::WesternEurope),
    country("lk", "Sri Lanka", Region::SouthAndSouthEastAsia),
    country("lr", "Liberia", Region::SubSaharanAfrica),
    country("ls", "Lesotho", Region::SubSaharanAfrica),
    country("lt", "Lithuania", Region::EasternEurope),
    country("lu", "Luxembourg", Region::WesternEurope),
    country("lv", "Latvia", Region::EasternEurope),
    country("ma", "Morocco", Region::MiddleEastAndNorthAfrica),
    country("mg", "Madagascar", Region::SubSaharanAfrica),
    country("mk", "North Macedonia", Region::EasternEurope),
    country("ml", "Mali", Region::SubSaharanAfrica),
    country("mm", "Myanmar", Region::SouthAndSouthEastAsia),
    country("mn", "Mongolia", Region::SouthAndSouthEastAsia),
    country("mr", "Mauritania", Region::SubSaharanAfrica),
    country("mt", "Malta", Region::WesternEurope),
    country("mu", "Mauritius", Region::SubSaharanAfrica),
    country("mw", "Malawi", Region::SubSaharanAfrica),
    country("mx", "Mexico", Region::LatinAmerica),
    country("my", "Malaysia", Region::SouthAndSouthEastAsia),
    country("mz", "Mozambique", Region::SubSaharanAfrica),
    country("na", "Namibia", Region::SubSaharanAfrica),
    country("ne", "Niger", Region::SubSaharanAfrica),
    country("ng", "Nigeria", Region::SubSaharanAfrica),
    country("ni", "Nicaragua", Region::LatinAmerica),
    country("nl", "Netherlands", Region::WesternEurope),
    country("no", "Norway", Region::WesternEurope),
    country("np", "Nepal", Region::SouthAndSouthEastAsia),
    country("nz", "New Zealand", Region::WesternOffshoots),
    country("om", "Oman", Region::MiddleEastAndNorthAfrica),
    country("pa", "Panama", Region::LatinAmerica),
    country("ph", "Philippines", Region::SouthAndSouthEastAsia),
    country("pk", "Pakistan", Region::SouthAndSouthEastAsia),
    country("pl", "Poland", Region::EasternEurope),
    country("pt", "Portugal", Region::WesternEurope),
    country("py", "Paraguay", Region::LatinAmerica),
    country("qa", "Qatar", Region::MiddleEastAndNorthAfrica),
    country("ro", "Romania", Region::EasternEurope),
    country("ru", "Russia", Region::EasternEurope),
    country("rw", "Rwanda", Region::SubSaharanAfrica),
    country("sa", "Saudi Arabia", Region::MiddleEastAndNorthAfrica),
    country("sd", "Sudan", Region::SubSaharanAfrica),
    country("se", "Sweden", Region::WesternEurope),
    country("sg", "Singapore", Region::SouthAndSouthEastAsia),
    country("si", "Slovenia", Region::EasternEurope),
    country("sk", "Slovakia", Region::EasternEurope),
    country("sl", "Sierra Leone", Region::SubSaharanAfrica),
    country("sn", "Senegal", Region::SubSaharanAfrica),
    country("ss", "South Sudan", Region::SubSaharanAfrica),
    country("sv", "El Salvador", Region::LatinAmerica),
    country("sy", "Syria", Region::MiddleEastAndNorthAfrica),
    country("sz", "Eswatini", Region::SubSaharanAfrica),
    country("td", "Chad", Region::SubSaharanAfrica),
    country("tg", "Togo", Region::SubSaharanAfrica),
    country("th", "Thailand", Region::SouthAndSouthEastAsia),
    country("tj", "Tajikistan", Region::EasternEurope),
    country("tn", "Tunisia", Region::MiddleEastAndNorthAfrica),
    country("tr", "Turkey", Region::MiddleEastAndNorthAfrica),
    country("tt", "Trinidad and Tobago", Region::LatinAmerica),
    country("tw", "Taiwan", Region::EastAsia),
    country("tz", "Tanzania", Region::SubSaharanAfrica),
    country("ua", "Ukraine", Region::EasternEurope),
    country("ug", "Uganda", Region::SubSaharanAfrica),
    country("uk", "United Kingdom", Region::WesternEurope),
    country("us", "United States of America", Region::WesternOffshoots),
    country("gov", "United States of America", Region::WesternOffshoots),
    country("uy", "Uruguay", Region::LatinAmerica),
    country("uz", "Uzbekistan", Region::EasternEurope),
    country("va", "Vatican City", Region::WesternEurope),
    country("ve", "Venezuela", Region::LatinAmerica),
    country("vn", "Vietnam", Region::SouthAndSouthEastAsia),
    country("ye", "Yemen", Region::MiddleEastAndNorthAfrica),
    country("za", "South Africa", Region::SubSaharanAfrica),
    country("zm", "Zambia", Region::SubSaharanAfrica),
    country("zw", "Zimbabwe", Region::SubSaharanAfrica),
];

const fn country(tld: &'static str, country: &'static str, region: Region) -> CountryEntry {
    CountryEntry {
        tld,
        country,
        region,
    }
}
