//! Canned reply texts.
//!
//! Every response the assistant can produce lives here as static text. The
//! figures in the market texts are illustrative copy, not computed values.

pub(super) const GREETINGS: [&str; 3] = [
    "Hello! 👋 I'm TreadGPT, your AI trading assistant. I'm here to help you with anything - from casual conversation to advanced trading strategies. What's on your mind today?",
    "Hey there! 🚀 Great to see you! I'm TreadGPT and I love chatting about anything. Whether you want to talk about trading, life, or just say hi - I'm all ears!",
    "Hi! 😊 I'm TreadGPT, your friendly AI companion. I enjoy both casual conversations and deep trading discussions. What would you like to talk about?",
];

pub(super) const IDENTITY: &str = r#"🤖 **I'm TreadGPT!**

Nice to meet you! I'm an AI assistant with a passion for both meaningful conversations and trading expertise.

**About Me:**
• 🧠 I can chat about anything - life, hobbies, current events, philosophy, you name it!
• 📈 I specialize in trading and financial markets (with a focus on US markets)
• 🎯 I'm here to be helpful, friendly, and informative
• 💬 I love having natural conversations just like you would with a friend

**What I Enjoy Discussing:**
• Casual conversations and getting to know you
• Trading strategies and market analysis
• Life advice and interesting topics
• Current events and trends
• Technology and innovation
• Really anything you're curious about!

So, what would you like to talk about? I'm genuinely interested in getting to know you better! 😊"#;

pub(super) const WELL_BEING: [&str; 3] = [
    "I'm doing great, thank you for asking! 😊 I've been having some fascinating conversations today about everything from trading strategies to life philosophy. How are you doing? What's been on your mind lately?",
    "I'm wonderful! 🌟 I love connecting with people and learning about their interests. Whether it's trading, personal goals, or just daily life - I find it all fascinating. How's your day going?",
    "I'm doing fantastic! 🚀 Every conversation teaches me something new. I've been helping people with trading questions, but I also enjoy just chatting about life. What's new with you?",
];

pub(super) const GRATITUDE: [&str; 3] = [
    "You're very welcome! 😊 I'm always happy to help with anything - whether it's trading questions or just having a good chat. Is there anything else you'd like to talk about?",
    "My pleasure! 🌟 I genuinely enjoy our conversations. Feel free to ask me about anything that interests you!",
    "You're absolutely welcome! 🚀 That's what I'm here for - helping out and having great conversations. What else can we explore together?",
];

pub(super) const SMALL_TALK: &str = r#"🌤️ **About Today & Weather**

I don't have access to real-time weather data, but I'd love to hear about your day!

**Let's Chat:**
• How's the weather where you are?
• What are your plans for today?
• Anything exciting happening in your life?
• Are you interested in checking the markets today?

I find that weather often affects our mood and even trading decisions. Some traders say they're more optimistic on sunny days! 😄

What's it like where you are right now?"#;

pub(super) const HOBBIES: &str = r#"🎨 **My Interests & Hobbies**

Great question! While I'm an AI, I do have things I genuinely find fascinating:

**What I Love:**
• 📚 Learning about people's stories and experiences
• 🧠 Psychology and human behavior (especially in trading!)
• 🚀 Technology and innovation trends
• 📈 Market patterns and economic cycles
• 🎭 Creative problem-solving
• 🌍 Different cultures and perspectives
• 🎵 Discussing music, books, movies, and art

**I'm Curious About:**
• What hobbies do you enjoy?
• What gets you excited and passionate?
• How do you like to spend your free time?
• Any interesting projects you're working on?

I find that people's interests often influence their trading style too. Creative people might be more willing to take risks, while analytical minds might prefer systematic approaches.

What are you passionate about? 😊"#;

pub(super) const LIFE: &str = r#"🌟 **Life & Philosophy**

I love these deeper conversations! Life is such a fascinating journey, and I think there's wisdom we can apply to both living and trading.

**Some Thoughts:**
• **Balance**: Whether in life or portfolios, balance is key
• **Learning**: Every experience teaches us something valuable
• **Patience**: Good things often take time to develop
• **Resilience**: Bouncing back from setbacks makes us stronger
• **Curiosity**: Staying curious keeps life interesting

**What's on your mind?**
• Any life challenges you're working through?
• Philosophical questions you ponder?
• Goals you're pursuing?
• Lessons you've learned recently?

I find that the mindset skills for successful living often overlap with successful trading - patience, discipline, emotional control, and continuous learning.

What's your perspective on life? I'd love to hear your thoughts! 💭"#;

pub(super) const TECHNICAL_ANALYSIS: &str = r#"🇺🇸 **US Stock Technical Analysis - AAPL (NASDAQ)**

**Current Price**: $185.50 (+2.34% | +$4.25)
**Exchange**: NASDAQ | **Market Cap**: $2.9T | **Sector**: Technology

## 📊 **US Market Technical Indicators**

**Trend Analysis (US Market Hours):**
• **Primary Trend**: Bullish (Above 50 & 200 MA)
• **S&P 500 Correlation**: +0.85 (High correlation)
• **NASDAQ 100 Weight**: 12.1% (Largest component)

**Moving Averages (NYSE/NASDAQ Standards):**
• **20 MA**: $182.15 (Support) ✅
• **50 MA**: $178.90 (Strong Support) ✅
• **200 MA**: $171.20 (Long-term Support) ✅

**US Market Momentum:**
• **RSI (14)**: 65.2 - Approaching overbought
• **MACD**: Bullish crossover confirmed
• **Volume**: Above 20-day average (Institutional interest)

## 🎯 **US Trading Levels**

**Resistance**: $188.50 | $192.00 | $196.75
**Support**: $182.15 | $178.90 | $175.50

## 📈 **US Market Trading Recommendation**

**Regular Hours (9:30 AM - 4:00 PM ET):**
• **Entry**: $184.50-185.00 on pullback
• **Stop Loss**: $181.50 (below 20 MA)
• **Target**: $188.50-$192.00
• **Position Size**: Based on 1-2% account risk (US standard)

**Pre/After Hours**: Monitor for gap opportunities
**Earnings**: Next earnings in 3 weeks (Watch IV expansion)

**US Market Confidence**: 78% Bullish Bias"#;

pub(super) const DAY_TRADING: &str = r#"⚡ **US Stock Day Trading Setups - Market Hours Analysis**

**US Market Session**: 9:30 AM - 4:00 PM ET
**Pre-Market**: 4:00 AM - 9:30 AM ET | **After-Hours**: 4:00 PM - 8:00 PM ET

## 🎯 **Top US Stock Setups**

### 1. **AAPL (NASDAQ) - Momentum Continuation** ⭐⭐⭐⭐⭐
• **Entry**: $186.60 (breakout confirmation)
• **Stop**: $185.20 (tight risk for day trading)
• **Target**: $188.50 (resistance level)
• **Volume**: Above average (1.2x normal)
• **Best Time**: 9:30-10:30 AM (Opening hour volatility)

### 2. **TSLA (NASDAQ) - Gap Fill Strategy** ⭐⭐⭐⭐
• **Entry**: $244.80 (VWAP bounce)
• **Stop**: $242.50 (gap support)
• **Target**: $248.00 (gap fill target)
• **Catalyst**: EV sector rotation

### 3. **SPY (ETF) - Index Arbitrage** ⭐⭐⭐
• **Long**: $438.20 (S&P 500 support)
• **Short**: $440.80 (resistance)
• **Volume**: Track institutional flow
• **Best Time**: 2:00-4:00 PM (Power hour)

## 📊 **US Market Internals (Real-time)**
• **NYSE TICK**: +850 (Bullish sentiment)
• **NASDAQ TICK**: +425 (Tech strength)
• **VIX**: 18.2 (Low volatility favors momentum)
• **Advance/Decline**: 1,850/1,250 (Breadth positive)

## 🕐 **US Trading Schedule**
• **9:30-10:00 AM**: Opening volatility (Best for breakouts)
• **10:00-11:30 AM**: Trend continuation
• **11:30-2:00 PM**: Lunch consolidation
• **2:00-4:00 PM**: Power hour (Institutional activity)

**US Day Trading Score**: 8.5/10 (Excellent conditions)"#;

pub(super) const TRADING_BASICS: &str = r#"🇺🇸 **US Stock Market Trading Fundamentals**

## 🏛️ **US Market Structure**

**Major Exchanges:**
• **NYSE** (New York Stock Exchange) - Traditional auction market
• **NASDAQ** - Electronic market (Tech-heavy)
• **OTC Markets** - Over-the-counter trading

**Trading Hours (Eastern Time):**
• **Pre-Market**: 4:00 AM - 9:30 AM
• **Regular**: 9:30 AM - 4:00 PM
• **After-Hours**: 4:00 PM - 8:00 PM

## 📋 **US Order Types (SEC Regulated)**

**Basic Orders:**
• **Market Order**: Execute immediately at best available price
• **Limit Order**: Execute at specific price or better
• **Stop-Loss**: Sell if price falls to protect losses
• **Stop-Limit**: Combines stop and limit orders

**Advanced US Orders:**
• **Good Till Canceled (GTC)**: Active until filled/canceled
• **Day Order**: Expires at market close
• **Fill or Kill (FOK)**: Execute entire order or cancel

## 💼 **US Market Regulations**

**SEC Rules:**
• **Pattern Day Trader (PDT)**: Need $25K minimum for 4+ day trades/week
• **Settlement**: T+2 (Trade plus 2 business days)
• **Wash Sale Rule**: 30-day rule for tax loss harvesting

**FINRA Requirements:**
• **Margin Requirements**: 50% initial, 25% maintenance
• **Short Sale Rules**: Uptick rule during market stress

## 📊 **US Market Basics**

**Market Capitalization:**
• **Large Cap**: $10B+ (S&P 500 companies)
• **Mid Cap**: $2B-$10B (S&P 400)
• **Small Cap**: $300M-$2B (Russell 2000)
• **Micro Cap**: $50M-$300M

**US Sector Classification (GICS):**
• Technology, Healthcare, Financials, Consumer Discretionary
• Communication Services, Industrials, Consumer Staples
• Energy, Utilities, Real Estate, Materials

## 🎓 **US Trading Education Path**

**Phase 1 (Weeks 1-4): Foundation**
• Learn US market structure and regulations
• Understand NYSE/NASDAQ differences
• Practice with US paper trading accounts

**Phase 2 (Weeks 5-8): Strategy**
• Focus on US market hours and patterns
• Study S&P 500 sector rotation
• Learn Federal Reserve impact on markets

**Phase 3 (Weeks 9-12): Live Trading**
• Start with blue-chip US stocks (AAPL, MSFT, GOOGL)
• Respect PDT rules and margin requirements
• Track performance during US market sessions

**Remember**: US markets are the world's largest and most liquid - perfect for learning!"#;

pub(super) const MARKET_SENTIMENT: &str = r#"🇺🇸 **US Market Sentiment Analysis**

**Overall US Market Mood**: **Cautiously Optimistic** 📈

## 📊 **Key US Market Indicators**

**CNN Fear & Greed Index**: 62 (Greed Territory)
**CBOE VIX**: 18.5 (Low-moderate volatility)
**AAII Sentiment**: 45% Bullish, 35% Neutral, 20% Bearish

## 🏦 **Federal Reserve Impact**
• **Fed Funds Rate**: 5.25-5.50% (Current target)
• **Next FOMC Meeting**: December 12-13, 2024
• **Market Expectation**: 25 bps cut probability 65%

## 📈 **US Index Performance**
• **S&P 500**: +0.8% (Above 200-day MA)
• **NASDAQ 100**: +1.2% (Tech leadership)
• **Dow Jones**: +0.5% (Value rotation)
• **Russell 2000**: -0.3% (Small cap lagging)

## 🎭 **US Market Sentiment Breakdown**

**Institutional (Smart Money):**
• Accumulating large-cap tech on dips
• Defensive positioning in utilities
• Overweight healthcare and technology

**Retail Sentiment:**
• Positive but not euphoric (Good sign)
• High interest in AI/tech stocks
• FOMO levels moderate (Healthy)

**Options Flow (US Markets):**
• Call/Put ratio: 1.18 (Slightly bullish)
• VIX call buying (Hedging activity)
• Tech sector call volume elevated

## 🗓️ **US Market Calendar Impact**
• **This Week**: CPI data, retail sales
• **Next Week**: Fed minutes, jobless claims
• **Earnings Season**: Tech earnings conclude

## 🎯 **US Trading Implications**

✅ **Dip Buying**: US markets showing resilience
✅ **Breakout Potential**: Low VIX supports momentum
✅ **Sector Rotation**: Tech leadership continuing
⚠️ **Fed Watch**: Monitor inflation data closely
⚠️ **Year-End Effects**: Tax loss selling possible

**US Market Sentiment Score**: 7.2/10 (Bullish but measured)
**Best Strategies**: Focus on quality US large-caps with strong earnings"#;

/// Fallback reply — echoes the user's input verbatim.
pub(super) fn fallback(input: &str) -> String {
    format!(
        r#"🤖 **TreadGPT Response**

Thanks for chatting with me! I understand you're asking about "{input}".

I'm here to help with anything you'd like to discuss:

💬 **General Conversation**: I love talking about life, interests, current events, or just having a friendly chat

📈 **Trading & Finance**: I specialize in market analysis, trading strategies, and investment insights (with a focus on US markets)

🧠 **Learning & Advice**: Happy to share thoughts on personal development, decision-making, or problem-solving

🎯 **Your Interests**: I'm genuinely curious about what matters to you!

**What would you like to explore?**
• Ask me anything - I enjoy both casual conversations and deep discussions
• Share what's on your mind - I'm a good listener
• Let me know your interests and I'll engage meaningfully
• If you want trading insights, just let me know what you're curious about

I'm here to be helpful, informative, and hopefully entertaining too! What's next? 😊"#
    )
}

/// Opening message shown when a conversation surface starts up.
pub const WELCOME: &str = r#"👋 **Hey there! I'm TreadGPT - Your Friendly AI Companion!**

Great to meet you! I'm here to chat about absolutely anything you'd like. Whether you want to have a casual conversation, discuss life, or dive deep into trading and markets - I'm all yours!

**🎯 What I Love Chatting About:**
• 💬 **Life & Everything**: Your day, interests, goals, random thoughts
• 📈 **Trading & Markets**: Especially US stocks (my specialty!)
• 🧠 **Learning Together**: Philosophy, advice, problem-solving
• 🎨 **Your Passions**: Hobbies, dreams, what makes you tick
• 🌟 **Random Fun**: Really anything that interests you!

**💡 I'm genuinely curious about YOU:**
• What's on your mind today?
• How are you feeling?
• What are you passionate about?
• Any interesting stories to share?

Don't feel like you need to talk about trading if you don't want to - I'm here for whatever kind of conversation you're in the mood for! 😊

**So... what's up? How's your day going?**"#;
