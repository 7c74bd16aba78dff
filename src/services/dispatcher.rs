//! Canned-response dispatch for the chat assistant.
//!
//! Pure functions of the input and the static tables: a recognized ticker
//! code wins over every topic keyword, topic rules are scanned in
//! declaration order (the keyword sets overlap, so order matters), and
//! anything unmatched gets the generic fallback. There is no error path;
//! "no match" is just the last branch.

use crate::services::profiles::{self, TICKER_CODES};

pub struct ResponseRule {
    pub keywords: &'static [&'static str],
    pub template: &'static str,
}

/// Topic rules in priority order. `fundamental` and `teknikal`/`chart`
/// both fire on mixed questions; the earlier rule wins.
pub static RULES: &[ResponseRule] = &[
    ResponseRule {
        keywords: &["cara memulai", "pemula", "mulai investasi"],
        template: PEMULA_TEMPLATE,
    },
    ResponseRule {
        keywords: &["analisis fundamental", "fundamental", "laporan keuangan"],
        template: FUNDAMENTAL_TEMPLATE,
    },
    ResponseRule {
        keywords: &["analisis teknikal", "teknikal", "chart", "grafik"],
        template: TEKNIKAL_TEMPLATE,
    },
    ResponseRule {
        keywords: &["dividend", "dividen", "yield"],
        template: DIVIDEN_TEMPLATE,
    },
    ResponseRule {
        keywords: &["buy and hold", "long term", "jangka panjang"],
        template: BUY_AND_HOLD_TEMPLATE,
    },
    ResponseRule {
        keywords: &["risk management", "manajemen risiko", "stop loss"],
        template: RISK_TEMPLATE,
    },
];

/// Answer a free-text question. Never returns an empty string.
pub fn dispatch(input: &str) -> String {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();

    for code in TICKER_CODES {
        if lowered.contains(code) {
            return stock_narrative(&code.to_uppercase());
        }
    }

    for rule in RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            return rule.template.to_string();
        }
    }

    fallback(trimmed)
}

fn stock_narrative(code: &str) -> String {
    match profiles::lookup(code).and_then(|p| p.narrative) {
        Some(narrative) => narrative.to_string(),
        None => format!(
            "Saya belum memiliki analisis detail untuk {code}. Namun saya bisa \
             memberikan analisis umum berdasarkan data pasar. Apakah ada saham \
             lain yang ingin dianalisis?"
        ),
    }
}

// The fallback echoes the question verbatim, case preserved.
fn fallback(question: &str) -> String {
    format!(
        "Terima kasih atas pertanyaan Anda tentang \"{question}\". Saya akan \
         memberikan informasi yang relevan berdasarkan data pasar terkini.

**Analisis Umum:**
- Pasar saham Indonesia menunjukkan volatilitas yang wajar
- Sektor perbankan dan telekomunikasi masih menjadi favorit investor
- Diversifikasi portofolio tetap menjadi kunci sukses investasi

Apakah ada aspek spesifik yang ingin Anda dalami lebih lanjut?"
    )
}

static QUICK_RULES: &[(&str, &str)] = &[
    (
        "bbri",
        "BBRI menunjukkan tren positif dengan fundamental yang kuat. Bank ini \
         memiliki NPL rendah dan pertumbuhan kredit yang stabil.",
    ),
    (
        "bmri",
        "BMRI sebagai bank terbesar memiliki diversifikasi yang baik. Namun, \
         perhatikan rasio CAR dan ROE di laporan keuangan terbaru.",
    ),
    (
        "ihsg",
        "IHSG saat ini berada dalam tren sideways dengan support di 7.200 dan \
         resistance di 7.300. Pantau volume trading.",
    ),
    (
        "investasi",
        "Untuk pemula, mulai dengan blue chip stocks dan diversifikasi \
         portofolio. Jangan lupa tentang manajemen risiko.",
    ),
    (
        "saham",
        "Analisis fundamental dan teknikal sangat penting. Perhatikan PER, ROE, \
         dan trend chart sebelum membeli.",
    ),
];

/// Short answer for the quick-question box on the dashboard. Smaller
/// keyword map, one-line fallback, does not touch the chat log.
pub fn quick_dispatch(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    for (keyword, answer) in QUICK_RULES {
        if lowered.contains(keyword) {
            return (*answer).to_string();
        }
    }
    "Pertanyaan yang menarik! Untuk analisis yang lebih mendalam, silakan \
     gunakan fitur AI Assistant di menu navigasi."
        .to_string()
}

/// Canned prompts offered under the chat input.
pub fn suggestions() -> &'static [&'static str] {
    &[
        "Bagaimana cara memulai investasi saham?",
        "Analisis BBRI hari ini",
        "Apa itu dividend yield?",
        "Strategi buy and hold",
        "Manajemen risiko trading",
        "Analisis fundamental vs teknikal",
        "Rekomendasi saham blue chip",
        "Tips untuk pemula",
    ]
}

/// Per-symbol market commentary for the chart sidebar, with a generic
/// paragraph for symbols without a canned write-up.
pub fn market_analysis(symbol: &str) -> String {
    let canned = match symbol.to_uppercase().as_str() {
        "IHSG" => Some(
            "**Outlook IHSG:** Indeks bergerak dalam tren sideways dengan support kuat di 7.200 dan resistance di 7.300.
**Sentimen:** Netral dengan bias positif dari sektor perbankan dan telekomunikasi.
**Volume:** Trading volume menunjukkan partisipasi investor yang sehat.",
        ),
        "BBRI" => Some(
            "**Tren BBRI:** Saham menunjukkan momentum positif dengan dukungan fundamental yang kuat.
**Katalis:** Pertumbuhan kredit mikro dan transformasi digital mendukung kinerja.
**Risk:** Perhatikan kualitas kredit dan persaingan di sektor perbankan.",
        ),
        "BMRI" => Some(
            "**Analisis BMRI:** Bergerak stabil dengan dukungan status sebagai bank BUKU 4.
**Kekuatan:** Diversifikasi portofolio dan digital banking yang kuat.
**Perhatian:** Ekspektasi pertumbuhan kredit dan margin bunga.",
        ),
        "TLKM" => Some(
            "**Prospek TLKM:** Beneficiary dari trend digitalisasi dan rollout 5G.
**Dividend:** Yield menarik dengan track record pembayaran yang konsisten.
**Growth:** Ekspansi layanan digital dan infrastruktur telekomunikasi.",
        ),
        "ASII" => Some(
            "**ASII Outlook:** Cyclical recovery dengan dukungan sektor otomotif dan infrastruktur.
**Diversifikasi:** Multi-sektor exposure memberikan stabilitas.
**Challenge:** Transisi ke electric vehicle dan volatilitas komoditas.",
        ),
        _ => None,
    };

    match canned {
        Some(text) => text.to_string(),
        None => format!(
            "Analisis untuk {symbol} sedang dikembangkan. Silakan gunakan fitur \
             AI Assistant untuk analisis yang lebih mendalam.
Klik pada titik chart untuk mendapatkan analisis spesifik pada level harga tersebut."
        ),
    }
}


const PEMULA_TEMPLATE: &str = "**Panduan Memulai Investasi Saham untuk Pemula**

**1. Persiapan Dasar:**
- Siapkan dana dingin minimal 1 juta rupiah
- Buka rekening efek di sekuritas terpercaya
- Pelajari dasar-dasar analisis fundamental dan teknikal

**2. Langkah Pertama:**
- Mulai dengan blue chip stocks (BBRI, BMRI, TLKM)
- Diversifikasi ke 3-5 saham berbeda sektor
- Terapkan dollar cost averaging

**3. Tips Penting:**
- Jangan investasi semua uang sekaligus
- Set target profit dan stop loss
- Investasi jangka panjang (minimal 1 tahun)

Apakah ada aspek tertentu yang ingin dipelajari lebih dalam?";

const FUNDAMENTAL_TEMPLATE: &str = "**Analisis Fundamental Saham**

**Rasio Keuangan Penting:**
- **PER (Price Earning Ratio):** Idealnya < 15x
- **PBV (Price to Book Value):** Idealnya < 2x
- **ROE (Return on Equity):** > 15% sangat baik
- **DER (Debt to Equity Ratio):** < 1x lebih aman

**Indikator Kesehatan Perusahaan:**
- Pertumbuhan revenue konsisten
- Margin profit yang stabil
- Arus kas operasional positif
- Dividen yield yang menarik

**Tips Analisis:**
- Bandingkan dengan peers di sektor yang sama
- Lihat tren 3-5 tahun terakhir
- Perhatikan outlook industri

Mau saya analisis saham spesifik?";

const TEKNIKAL_TEMPLATE: &str = "**Analisis Teknikal Dasar**

**Indikator Utama:**
- **Moving Average:** MA20 dan MA50 untuk trend
- **RSI:** Overbought (>70), Oversold (<30)
- **MACD:** Signal bullish/bearish
- **Support & Resistance:** Level kunci harga

**Pattern Recognition:**
- Head & Shoulders: Reversal pattern
- Triangle: Continuation pattern
- Double Top/Bottom: Reversal signal

**Tips Trading:**
- Konfirmasi dengan volume tinggi
- Multiple timeframe analysis
- Risk management dengan stop loss

**Timeframe Recommended:**
- Day trading: 15m, 1H
- Swing trading: 4H, Daily
- Investment: Weekly, Monthly

Ingin analisis chart saham tertentu?";

const DIVIDEN_TEMPLATE: &str = "**Panduan Dividend Yield dan Investasi Dividen**

**Apa itu Dividend Yield?**
Persentase dividen tahunan dibagi harga saham saat ini

**Saham High Dividend di Indonesia:**
- TLKM: ~4-5% yield
- BMRI: ~3-4% yield
- ASII: ~2-3% yield
- UNTR: ~4-6% yield

**Strategi Dividend Investing:**
- Pilih perusahaan dengan track record dividen konsisten
- Perhatikan payout ratio (idealnya 40-60%)
- Diversifikasi sektor untuk stabilitas

**Keuntungan:**
- Passive income rutin
- Cocok untuk investor konservatif
- Compound effect jangka panjang

**Risiko:**
- Dividen bisa dipotong saat krisis
- Capital gain terbatas
- Tax implications

Ingin rekomendasi saham dividen terbaik?";

const BUY_AND_HOLD_TEMPLATE: &str = "**Strategi Buy and Hold**

**Prinsip Dasar:**
- Beli saham berkualitas dan tahan jangka panjang (5-10 tahun)
- Fokus pada fundamental perusahaan
- Abaikan fluktuasi harga jangka pendek

**Kriteria Saham untuk Buy and Hold:**
- Leader di industrinya
- Moat atau competitive advantage
- Management berkualitas
- Consistent earnings growth

**Contoh Saham Buy and Hold Indonesia:**
- BBRI: Bank retail terbesar
- TLKM: Monopoli telekomunikasi
- ASII: Konglomerat otomotif
- ICBP: Consumer staples

**Keuntungan:**
- Compound interest effect
- Menghindari market timing
- Biaya transaksi rendah
- Less stress

**Tips Sukses:**
- Dollar cost averaging
- Reinvest dividends
- Review tahunan portfolio
- Stay disciplined

Butuh bantuan memilih saham untuk buy and hold?";

const RISK_TEMPLATE: &str = "**Manajemen Risiko dalam Trading Saham**

**Prinsip 2% Rule:**
- Maksimal risiko 2% dari total portfolio per trade
- Jika portfolio 100 juta, maksimal loss 2 juta per trade

**Stop Loss Strategy:**
- Technical stop loss: Di bawah support
- Percentage stop loss: 5-10% dari entry
- Time-based stop loss: Exit jika tidak bergerak

**Position Sizing:**
- Hitung risk/reward ratio minimal 1:2
- Diversifikasi maksimal 5% per saham
- Reserve cash untuk averaging down

**Diversifikasi:**
- Sektor: Banking, Consumer, Mining, Infrastructure
- Market cap: Large cap, mid cap, small cap
- Geografi: Lokal vs global exposure

**Psychological Discipline:**
- Stick to your plan
- Don't chase FOMO
- Cut losses early, let profits run

**Portfolio Allocation:**
- 60% blue chips
- 30% growth stocks
- 10% speculative plays

Mau simulasi perhitungan risk untuk trade tertentu?";
