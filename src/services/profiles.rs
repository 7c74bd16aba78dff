//! Static per-stock reference data: codes, base prices and volumes for
//! the synthesizer, and the canned analysis narratives for the chat
//! assistant. All tables are process-wide constants.

pub struct StockProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub sector: &'static str,
    pub base_price: f64,
    pub base_volume: f64,
    /// Full canned analysis; codes without one get the generic
    /// "not yet available" reply.
    pub narrative: Option<&'static str>,
}

/// Ticker codes the chat dispatcher recognizes, lowercase. Codes take
/// absolute priority over topic keywords.
pub const TICKER_CODES: [&str; 6] = ["bbri", "bmri", "tlkm", "asii", "bbca", "bni"];

pub static DEFAULT_PROFILE: StockProfile = StockProfile {
    code: "",
    name: "Saham",
    sector: "Lainnya",
    base_price: 5_000.0,
    base_volume: 20_000_000.0,
    narrative: None,
};

pub static PROFILES: &[StockProfile] = &[
    StockProfile {
        code: "IHSG",
        name: "Indeks Harga Saham Gabungan",
        sector: "Indeks",
        base_price: 7_234.0,
        base_volume: 15_000_000.0,
        narrative: None,
    },
    StockProfile {
        code: "BBRI",
        name: "Bank Rakyat Indonesia",
        sector: "Perbankan",
        base_price: 4_580.0,
        base_volume: 50_000_000.0,
        narrative: Some(BBRI_NARRATIVE),
    },
    StockProfile {
        code: "BMRI",
        name: "Bank Mandiri",
        sector: "Perbankan",
        base_price: 5_325.0,
        base_volume: 30_000_000.0,
        narrative: Some(BMRI_NARRATIVE),
    },
    StockProfile {
        code: "TLKM",
        name: "Telkom Indonesia",
        sector: "Telekomunikasi",
        base_price: 3_150.0,
        base_volume: 25_000_000.0,
        narrative: Some(TLKM_NARRATIVE),
    },
    StockProfile {
        code: "ASII",
        name: "Astra International",
        sector: "Otomotif",
        base_price: 6_875.0,
        base_volume: 8_000_000.0,
        narrative: Some(ASII_NARRATIVE),
    },
];

/// Case-insensitive lookup by ticker code.
pub fn lookup(code: &str) -> Option<&'static StockProfile> {
    PROFILES.iter().find(|p| p.code.eq_ignore_ascii_case(code))
}

/// Unknown symbols fall back to a generic profile instead of erroring.
pub fn profile_or_default(code: &str) -> &'static StockProfile {
    lookup(code).unwrap_or(&DEFAULT_PROFILE)
}

const BBRI_NARRATIVE: &str = "**Analisis BBRI (Bank Rakyat Indonesia)**

**Fundamental Analysis:**
- PER: 8.5x (Attractive)
- PBV: 1.2x (Reasonable)
- ROE: 18.5% (Excellent)
- NPL: 2.1% (Healthy)

**Strengths:**
- Market leader di segmen mikro dan UMKM
- Digital banking transformation
- Strong credit growth
- Consistent dividend payout

**Catalysts:**
- Ekspansi digital banking
- Economic recovery Indonesia
- Interest rate normalization
- UMKM sector recovery

**Technical View:**
- Support: 4,400
- Resistance: 4,800
- RSI: 65 (Neutral to bullish)
- Trend: Bullish

**Target Price: 5,200 (Upside 13.5%)**
**Recommendation: BUY**";

const BMRI_NARRATIVE: &str = "**Analisis BMRI (Bank Mandiri)**

**Fundamental Analysis:**
- PER: 9.2x (Fair)
- PBV: 1.1x (Attractive)
- ROE: 16.8% (Good)
- NPL: 2.8% (Manageable)

**Strengths:**
- Largest bank by assets
- Strong corporate banking
- Digital transformation progress
- Government backing

**Risks:**
- Exposure to large corporates
- Competition in retail segment
- Credit risk in current environment

**Technical View:**
- Support: 5,100
- Resistance: 5,500
- RSI: 58 (Neutral)
- Trend: Sideways

**Target Price: 5,800 (Upside 8.9%)**
**Recommendation: HOLD**";

const TLKM_NARRATIVE: &str = "**Analisis TLKM (Telkom Indonesia)**

**Fundamental Analysis:**
- PER: 12.5x (Reasonable)
- PBV: 1.8x (Fair)
- ROE: 14.2% (Good)
- Dividend Yield: 4.8% (Attractive)

**Strengths:**
- Monopoli infrastruktur telekomunikasi
- 5G rollout opportunity
- Digital business expansion
- Stable dividend payer

**Growth Drivers:**
- Data consumption growth
- Digital transformation Indonesia
- Enterprise solutions
- Tower monetization

**Technical View:**
- Support: 3,000
- Resistance: 3,300
- RSI: 72 (Slightly overbought)
- Trend: Bullish

**Target Price: 3,600 (Upside 14.3%)**
**Recommendation: BUY**";

const ASII_NARRATIVE: &str = "**Analisis ASII (Astra International)**

**Fundamental Analysis:**
- PER: 11.8x (Fair)
- PBV: 1.5x (Reasonable)
- ROE: 12.5% (Decent)
- Dividend Yield: 2.8% (Moderate)

**Business Segments:**
- Automotive: 50% revenue
- Financial Services: 20%
- Heavy Equipment: 15%
- Agribusiness: 10%
- Others: 5%

**Catalysts:**
- Automotive market recovery
- Infrastructure projects
- Electric vehicle transition
- Commodity price stability

**Risks:**
- Cyclical nature of business
- Competition in automotive
- Commodity price volatility

**Target Price: 7,500 (Upside 9.1%)**
**Recommendation: HOLD**";
