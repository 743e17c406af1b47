//! Embedded seed catalog
//!
//! Used to populate an empty relational store and to build the in-memory
//! fallback. Declaration order is significant: the in-memory backend lists
//! these most-recent-first in exactly this order.

use mahfudzot_types::QuoteRequest;

/// One catalog entry. Ids and timestamps are assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedQuote {
    pub text_arabic: &'static str,
    pub text_latin: &'static str,
    pub translation: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub source: &'static str,
}

impl SeedQuote {
    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest {
            text_arabic: self.text_arabic.to_string(),
            text_latin: non_empty(self.text_latin),
            translation: non_empty(self.translation),
            author: self.author.to_string(),
            category: non_empty(self.category),
            source: non_empty(self.source),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

pub static SEED_CATALOG: &[SeedQuote] = &[
    // Prophet Muhammad
    SeedQuote {
        text_arabic: "إنما الأعمال بالنيات",
        text_latin: "Innama al-a'malu bin-niyyat",
        translation: "Actions are but by intention",
        author: "Prophet Muhammad",
        category: "Intention",
        source: "Sahih Bukhari",
    },
    SeedQuote {
        text_arabic: "اطلبوا العلم من المهد إلى اللحد",
        text_latin: "Utlubu al-'ilma min al-mahdi ila al-lahd",
        translation: "Seek knowledge from the cradle to the grave",
        author: "Prophet Muhammad",
        category: "Knowledge",
        source: "Hadith",
    },
    SeedQuote {
        text_arabic: "الصبر مفتاح الفرج",
        text_latin: "As-sabru miftahu al-faraj",
        translation: "Patience is the key to relief",
        author: "Prophet Muhammad",
        category: "Patience",
        source: "Hadith",
    },
    SeedQuote {
        text_arabic: "من كان في حاجة أخيه كان الله في حاجته",
        text_latin: "Man kana fi hajati akhihi kana Allahu fi hajatih",
        translation: "Whoever helps his brother, Allah will help him",
        author: "Prophet Muhammad",
        category: "Brotherhood",
        source: "Sahih Bukhari",
    },
    SeedQuote {
        text_arabic: "خير الناس أنفعهم للناس",
        text_latin: "Khairu an-nasi anfa'uhum lin-nas",
        translation: "The best of people are those who benefit others",
        author: "Prophet Muhammad",
        category: "Service",
        source: "Hadith",
    },
    // Imam Ali
    SeedQuote {
        text_arabic: "العلم نور",
        text_latin: "Al-'ilmu nur",
        translation: "Knowledge is light",
        author: "Imam Ali",
        category: "Knowledge",
        source: "Nahj al-Balagha",
    },
    SeedQuote {
        text_arabic: "الدنيا دار ممر لا دار مقر",
        text_latin: "Ad-dunya daru mamarrin la daru muqarr",
        translation: "This world is a place of passage, not a place of residence",
        author: "Imam Ali",
        category: "Wisdom",
        source: "Nahj al-Balagha",
    },
    SeedQuote {
        text_arabic: "من عرف نفسه فقد عرف ربه",
        text_latin: "Man 'arafa nafsahu faqad 'arafa rabbah",
        translation: "Whoever knows himself knows his Lord",
        author: "Imam Ali",
        category: "Self-Knowledge",
        source: "Nahj al-Balagha",
    },
    SeedQuote {
        text_arabic: "الصمت حكمة وقليل فاعله",
        text_latin: "As-samtu hikmah wa qalilun fa'iluh",
        translation: "Silence is wisdom, but few practice it",
        author: "Imam Ali",
        category: "Wisdom",
        source: "Nahj al-Balagha",
    },
    SeedQuote {
        text_arabic: "لا تكن عبداً لغيرك وقد جعلك الله حراً",
        text_latin: "La takun 'abdan li-ghayriki wa qad ja'alaka Allahu hurran",
        translation: "Do not be a slave to others when Allah has made you free",
        author: "Imam Ali",
        category: "Freedom",
        source: "Nahj al-Balagha",
    },
    // Imam Al-Ghazali
    SeedQuote {
        text_arabic: "العلم ما نفع ليس العلم ما حفظ",
        text_latin: "Al-'ilmu ma nafa'a laysa al-'ilmu ma hufiza",
        translation: "Knowledge is what benefits, not what is memorized",
        author: "Imam Al-Ghazali",
        category: "Knowledge",
        source: "Ihya Ulum al-Din",
    },
    SeedQuote {
        text_arabic: "القلب إذا أقبل على الله أقبل الله عليه",
        text_latin: "Al-qalbu idha aqbala 'ala Allah aqbala Allahu 'alayh",
        translation: "When the heart turns to Allah, Allah turns to it",
        author: "Imam Al-Ghazali",
        category: "Spirituality",
        source: "Ihya Ulum al-Din",
    },
    SeedQuote {
        text_arabic: "الدنيا مزرعة الآخرة",
        text_latin: "Ad-dunya mazra'atu al-akhirah",
        translation: "This world is the farm of the hereafter",
        author: "Imam Al-Ghazali",
        category: "Life",
        source: "Ihya Ulum al-Din",
    },
    // Ibn Sina
    SeedQuote {
        text_arabic: "الجهل موت الأحياء",
        text_latin: "Al-jahlu mawtu al-ahya'",
        translation: "Ignorance is the death of the living",
        author: "Ibn Sina",
        category: "Knowledge",
        source: "Al-Qanun fi al-Tibb",
    },
    SeedQuote {
        text_arabic: "العقل السليم في الجسم السليم",
        text_latin: "Al-'aqlu as-salimu fi al-jismi as-salim",
        translation: "A sound mind in a sound body",
        author: "Ibn Sina",
        category: "Health",
        source: "Medical Works",
    },
    // Al-Mutanabbi
    SeedQuote {
        text_arabic: "من طلب العلا سهر الليالي",
        text_latin: "Man talaba al-'ula sahira al-layali",
        translation: "Whoever seeks excellence stays awake at night",
        author: "Al-Mutanabbi",
        category: "Excellence",
        source: "Diwan Al-Mutanabbi",
    },
    SeedQuote {
        text_arabic: "على قدر أهل العزم تأتي العزائم",
        text_latin: "Ala qadri ahli al-'azmi ta'ti al-'aza'im",
        translation: "Great deeds come from people of great determination",
        author: "Al-Mutanabbi",
        category: "Determination",
        source: "Diwan Al-Mutanabbi",
    },
    SeedQuote {
        text_arabic: "ومن يك ذا فم مر مريض يجد مراً به الماء الزلالا",
        text_latin: "Wa man yaku dha famin murrin maridin yajid murran bihi al-ma'a az-zulala",
        translation: "One with a bitter sick mouth will find even pure water bitter",
        author: "Al-Mutanabbi",
        category: "Perspective",
        source: "Diwan Al-Mutanabbi",
    },
    // Ibn Khaldun
    SeedQuote {
        text_arabic: "العصبية أساس الملك",
        text_latin: "Al-'asabiyyatu asasu al-mulk",
        translation: "Social cohesion is the foundation of power",
        author: "Ibn Khaldun",
        category: "Society",
        source: "Al-Muqaddimah",
    },
    SeedQuote {
        text_arabic: "التاريخ في ظاهره لا يزيد عن الإخبار",
        text_latin: "At-tarikhu fi zahirihi la yazidu 'an al-ikhbar",
        translation: "History on its surface is nothing more than information",
        author: "Ibn Khaldun",
        category: "History",
        source: "Al-Muqaddimah",
    },
    // Imam Ash-Shafi'i
    SeedQuote {
        text_arabic: "ما جادلت أحداً إلا تمنيت أن يظهر الله الحق على لسانه",
        text_latin: "Ma jadaltu ahadan illa tamannaytu an yuzhira Allahu al-haqqa 'ala lisanih",
        translation: "I never debated anyone except I wished Allah would show the truth through their tongue",
        author: "Imam Ash-Shafi'i",
        category: "Humility",
        source: "Manaqib Ash-Shafi'i",
    },
    SeedQuote {
        text_arabic: "كلما ازددت علماً ازددت علماً بجهلي",
        text_latin: "Kullama izdadtu 'ilman izdadtu 'ilman bi-jahli",
        translation: "The more I learn, the more I realize my ignorance",
        author: "Imam Ash-Shafi'i",
        category: "Humility",
        source: "Sayings",
    },
    // Ibn Taymiyyah
    SeedQuote {
        text_arabic: "القلب لا يستقيم إلا بالتوحيد",
        text_latin: "Al-qalbu la yastaqimu illa bit-tawhid",
        translation: "The heart cannot be upright except through monotheism",
        author: "Ibn Taymiyyah",
        category: "Faith",
        source: "Majmu' al-Fatawa",
    },
    SeedQuote {
        text_arabic: "من أراد السعادة الأبدية فليلزم عتبة العبودية",
        text_latin: "Man arada as-sa'adat al-abadiyyata falyalzam 'atabat al-'ubudiyyah",
        translation: "Whoever wants eternal happiness should stick to the threshold of servitude",
        author: "Ibn Taymiyyah",
        category: "Spirituality",
        source: "Al-Ubudiyyah",
    },
    // Al-Jahiz
    SeedQuote {
        text_arabic: "الكتاب أستاذ لا يعنف ومعلم لا يغضب",
        text_latin: "Al-kitabu ustadhun la yu'annifu wa mu'allimun la yaghdhab",
        translation: "A book is a teacher that doesn't scold and an instructor that doesn't get angry",
        author: "Al-Jahiz",
        category: "Knowledge",
        source: "Al-Bayan wa al-Tabyin",
    },
    // Ibn Rushd
    SeedQuote {
        text_arabic: "الجهل يؤدي إلى الخوف والخوف يؤدي إلى الكراهية",
        text_latin: "Al-jahlu yu'addi ila al-khawfi wal-khawfu yu'addi ila al-karahiyyah",
        translation: "Ignorance leads to fear, and fear leads to hatred",
        author: "Ibn Rushd",
        category: "Wisdom",
        source: "Philosophical Works",
    },
    // Al-Kindi
    SeedQuote {
        text_arabic: "لا نستحي من قول الحق واقتباس الحق من أين أتى",
        text_latin: "La nastahi min qawli al-haqqi waqtibasi al-haqqi min ayna ata",
        translation: "We should not be ashamed to speak the truth and acquire truth from wherever it comes",
        author: "Al-Kindi",
        category: "Truth",
        source: "Philosophical Treatises",
    },
    // Imam Ahmad ibn Hanbal
    SeedQuote {
        text_arabic: "العلم لا يعطيك بعضه حتى تعطيه كلك",
        text_latin: "Al-'ilmu la yu'tika ba'dhahu hatta tu'tiyahu kullak",
        translation: "Knowledge will not give you part of it until you give it all of yourself",
        author: "Imam Ahmad ibn Hanbal",
        category: "Knowledge",
        source: "Sayings",
    },
    SeedQuote {
        text_arabic: "الناس إلى العدل أحوج منهم إلى الماء والنار",
        text_latin: "An-nasu ila al-'adli ahwaju minhum ila al-ma'i wan-nar",
        translation: "People need justice more than they need water and fire",
        author: "Imam Ahmad ibn Hanbal",
        category: "Justice",
        source: "Musnad Ahmad",
    },
    // Al-Farabi
    SeedQuote {
        text_arabic: "الفضيلة وسط بين رذيلتين",
        text_latin: "Al-fadilatu wasatun bayna radhilatayn",
        translation: "Virtue is the middle path between two vices",
        author: "Al-Farabi",
        category: "Ethics",
        source: "Al-Madina al-Fadila",
    },
    SeedQuote {
        text_arabic: "السعادة هي الخير الأعظم",
        text_latin: "As-sa'adatu hiya al-khayru al-a'zam",
        translation: "Happiness is the greatest good",
        author: "Al-Farabi",
        category: "Happiness",
        source: "Tahsil al-Sa'ada",
    },
    // Ibn al-Qayyim
    SeedQuote {
        text_arabic: "القلوب آنية الله في أرضه",
        text_latin: "Al-qulubu aniyatu Allahi fi ardhih",
        translation: "Hearts are Allah's vessels on His earth",
        author: "Ibn al-Qayyim",
        category: "Spirituality",
        source: "Madarij al-Salikin",
    },
    SeedQuote {
        text_arabic: "الدعاء مخ العبادة",
        text_latin: "Ad-du'a'u mukhkhu al-'ibadah",
        translation: "Prayer is the essence of worship",
        author: "Ibn al-Qayyim",
        category: "Prayer",
        source: "Al-Jawab al-Kafi",
    },
    // Fakhr al-Din al-Razi
    SeedQuote {
        text_arabic: "العقل نور والنقل نور ولا تعارض بين نورين",
        text_latin: "Al-'aqlu nurun wan-naqlu nurun wa la ta'aruda bayna nurayn",
        translation: "Reason is light and revelation is light, and there is no contradiction between two lights",
        author: "Fakhr al-Din al-Razi",
        category: "Reason",
        source: "Mafatih al-Ghayb",
    },
    // Ibn Arabi
    SeedQuote {
        text_arabic: "من عرف نفسه عرف ربه",
        text_latin: "Man 'arafa nafsahu 'arafa rabbah",
        translation: "Whoever knows himself knows his Lord",
        author: "Ibn Arabi",
        category: "Self-Knowledge",
        source: "Fusus al-Hikam",
    },
    SeedQuote {
        text_arabic: "الكون كله كتاب الله المنشور",
        text_latin: "Al-kawnu kulluhu kitabu Allahi al-manshur",
        translation: "The entire universe is Allah's open book",
        author: "Ibn Arabi",
        category: "Universe",
        source: "Al-Futuhat al-Makkiyyah",
    },
    // Imam Al-Bukhari
    SeedQuote {
        text_arabic: "ما كتبت حديثاً إلا اغتسلت قبله وصليت ركعتين",
        text_latin: "Ma katabtu hadithan illa ightasaltu qablahu wa sallaytu rak'atayn",
        translation: "I never wrote a hadith except that I performed ablution before it and prayed two units",
        author: "Imam Al-Bukhari",
        category: "Scholarship",
        source: "Biography",
    },
    // Imam Muslim
    SeedQuote {
        text_arabic: "الإسناد من الدين ولولا الإسناد لقال من شاء ما شاء",
        text_latin: "Al-isnadu min ad-dini wa lawla al-isnadu laqala man sha'a ma sha'a",
        translation: "Chain of narration is part of religion; without it, anyone could say whatever they wanted",
        author: "Imam Muslim",
        category: "Scholarship",
        source: "Sahih Muslim Introduction",
    },
    // Imam An-Nawawi
    SeedQuote {
        text_arabic: "من سلك طريقاً يلتمس فيه علماً سهل الله له طريقاً إلى الجنة",
        text_latin: "Man salaka tariqan yaltamisu fihi 'ilman sahhal Allahu lahu tariqan ila al-jannah",
        translation: "Whoever travels a path seeking knowledge, Allah will make easy for him a path to Paradise",
        author: "Imam An-Nawawi",
        category: "Knowledge",
        source: "Riyadh as-Salihin",
    },
    // Ibn Kathir
    SeedQuote {
        text_arabic: "القرآن يفسر بعضه بعضاً",
        text_latin: "Al-Qur'anu yufassiru ba'duhu ba'dan",
        translation: "The Quran explains parts of itself through other parts",
        author: "Ibn Kathir",
        category: "Quran",
        source: "Tafsir Ibn Kathir",
    },
    // Al-Tabari
    SeedQuote {
        text_arabic: "لا يستغني طالب العلم عن أربعة: ذكاء الطبع وطول الباع وكثرة الاطلاع وطول العمر",
        text_latin: "La yastaghni talibu al-'ilmi 'an arba'ah: dhaka'u at-tab'i wa tulu al-ba'i wa kathratu al-ittila'i wa tulu al-'umr",
        translation: "A seeker of knowledge cannot do without four things: natural intelligence, extensive reach, broad reading, and long life",
        author: "Al-Tabari",
        category: "Knowledge",
        source: "Tafsir al-Tabari",
    },
    // Al-Qurtubi
    SeedQuote {
        text_arabic: "العبرة بعموم اللفظ لا بخصوص السبب",
        text_latin: "Al-'ibratu bi-'umumi al-lafzi la bi-khususi as-sabab",
        translation: "Consideration is given to the generality of the wording, not the specificity of the reason",
        author: "Al-Qurtubi",
        category: "Jurisprudence",
        source: "Tafsir al-Qurtubi",
    },
    // Ibn Hazm
    SeedQuote {
        text_arabic: "من أراد أن ينصف من نفسه فليتوهم نفسه خصماً ومن خالفه منصفاً",
        text_latin: "Man arada an yunsifa min nafsihi falyatawahham nafsahu khasman wa man khalafahu munsifan",
        translation: "Whoever wants to be fair to himself should imagine himself as an opponent and his opponent as fair",
        author: "Ibn Hazm",
        category: "Justice",
        source: "Al-Akhlaq wa al-Siyar",
    },
    SeedQuote {
        text_arabic: "آفة العلماء الوقوف مع المتشابه",
        text_latin: "Afatu al-'ulama'i al-wuqufu ma'a al-mutashabih",
        translation: "The bane of scholars is stopping at ambiguous matters",
        author: "Ibn Hazm",
        category: "Scholarship",
        source: "Al-Ihkam fi Usul al-Ahkam",
    },
    // Imam Malik
    SeedQuote {
        text_arabic: "ما منا إلا راد ومردود عليه إلا صاحب هذا القبر",
        text_latin: "Ma minna illa raddun wa mardudun 'alayhi illa sahibu hadha al-qabr",
        translation: "None of us is free from error and being corrected, except the occupant of this grave (Prophet Muhammad)",
        author: "Imam Malik",
        category: "Humility",
        source: "Al-Muwatta",
    },
    SeedQuote {
        text_arabic: "لن يصلح آخر هذه الأمة إلا بما صلح به أولها",
        text_latin: "Lan yasluh akhiru hadhihi al-ummati illa bima salaha bihi awwaluha",
        translation: "The latter part of this nation will not be reformed except by that which reformed its early part",
        author: "Imam Malik",
        category: "Reform",
        source: "Sayings",
    },
    // Imam Abu Hanifa
    SeedQuote {
        text_arabic: "لولا السنتان لهلك النعمان",
        text_latin: "Lawla as-sanatan lahalaka an-Nu'man",
        translation: "Were it not for the two years (with Abu Hanifa's teachers), Nu'man would have perished",
        author: "Imam Abu Hanifa",
        category: "Learning",
        source: "Biography",
    },
    SeedQuote {
        text_arabic: "الفقه أفضل من العبادة",
        text_latin: "Al-fiqhu afdalu min al-'ibadah",
        translation: "Understanding (jurisprudence) is better than worship",
        author: "Imam Abu Hanifa",
        category: "Knowledge",
        source: "Sayings",
    },
    // Al-Junayd
    SeedQuote {
        text_arabic: "التصوف أن تكون مع الله بلا علاقة",
        text_latin: "At-tasawwufu an takuna ma'a Allahi bila 'alaqah",
        translation: "Sufism is to be with Allah without attachment",
        author: "Al-Junayd",
        category: "Spirituality",
        source: "Sufi Teachings",
    },
    SeedQuote {
        text_arabic: "الطرق إلى الله بعدد أنفاس الخلائق",
        text_latin: "At-turuqu ila Allahi bi-'adadi anfasi al-khala'iq",
        translation: "The paths to Allah are as numerous as the breaths of creation",
        author: "Al-Junayd",
        category: "Spirituality",
        source: "Sufi Teachings",
    },
    // Al-Hallaj
    SeedQuote {
        text_arabic: "من لم تحرقه المحبة فهو ناقص الوضوء",
        text_latin: "Man lam tuhriqhu al-mahabbatu fahuwa naqisu al-wudu'",
        translation: "Whoever is not burned by love has incomplete ablution",
        author: "Al-Hallaj",
        category: "Love",
        source: "Diwan al-Hallaj",
    },
    // Rumi
    SeedQuote {
        text_arabic: "كن كالماء في التواضع وكالنار في الهمة",
        text_latin: "Kun kal-ma'i fi at-tawadu'i wa kan-nari fi al-himmah",
        translation: "Be like water in humility and like fire in determination",
        author: "Rumi",
        category: "Character",
        source: "Masnavi",
    },
    SeedQuote {
        text_arabic: "أمس ذهب وغداً لم يأت واليوم بين يديك",
        text_latin: "Amsi dhahaba wa ghadan lam ya'ti wal-yawmu bayna yadayk",
        translation: "Yesterday is gone, tomorrow has not come, and today is in your hands",
        author: "Rumi",
        category: "Time",
        source: "Masnavi",
    },
    // Saadi Shirazi
    SeedQuote {
        text_arabic: "بني آدم أعضاء جسد واحد",
        text_latin: "Bani Adama a'da'u jasadin wahid",
        translation: "Human beings are members of one body",
        author: "Saadi Shirazi",
        category: "Humanity",
        source: "Gulistan",
    },
    // Hafez
    SeedQuote {
        text_arabic: "لا تحزن إن لم تفهم أسرار الحب",
        text_latin: "La tahzan in lam tafham asrara al-hubb",
        translation: "Do not grieve if you do not understand the secrets of love",
        author: "Hafez",
        category: "Love",
        source: "Diwan Hafez",
    },
    // Omar Khayyam
    SeedQuote {
        text_arabic: "اشرب الخمر واترك الحكمة للحكماء",
        text_latin: "Ishrab al-khamra watruk al-hikmata lil-hukama'",
        translation: "Drink wine and leave wisdom to the wise",
        author: "Omar Khayyam",
        category: "Philosophy",
        source: "Rubaiyat",
    },
    // Al-Biruni
    SeedQuote {
        text_arabic: "العلم أشرف ما رغب فيه الراغب",
        text_latin: "Al-'ilmu ashrafu ma raghiba fihi ar-raghib",
        translation: "Knowledge is the noblest thing a seeker can desire",
        author: "Al-Biruni",
        category: "Knowledge",
        source: "Scientific Works",
    },
    // Ibn Battuta
    SeedQuote {
        text_arabic: "السفر يعلم الصبر",
        text_latin: "As-safaru yu'allimu as-sabr",
        translation: "Travel teaches patience",
        author: "Ibn Battuta",
        category: "Travel",
        source: "Rihla",
    },
    // Al-Mas'udi
    SeedQuote {
        text_arabic: "التاريخ مرآة الأمم",
        text_latin: "At-tarikhu mir'atu al-umam",
        translation: "History is the mirror of nations",
        author: "Al-Mas'udi",
        category: "History",
        source: "Muruj adh-Dhahab",
    },
    // Ibn al-Athir
    SeedQuote {
        text_arabic: "العدل أساس الملك",
        text_latin: "Al-'adlu asasu al-mulk",
        translation: "Justice is the foundation of rule",
        author: "Ibn al-Athir",
        category: "Justice",
        source: "Al-Kamil fi at-Tarikh",
    },
    // Al-Suyuti
    SeedQuote {
        text_arabic: "طلب العلم فريضة على كل مسلم ومسلمة",
        text_latin: "Talabu al-'ilmi faridatun 'ala kulli muslimin wa muslimah",
        translation: "Seeking knowledge is an obligation upon every Muslim man and woman",
        author: "Al-Suyuti",
        category: "Knowledge",
        source: "Jami' as-Saghir",
    },
    // Ibn Qudamah
    SeedQuote {
        text_arabic: "من استوى يوماه فهو مغبون",
        text_latin: "Man istawaya yawmahu fahuwa maghbun",
        translation: "Whoever's two days are equal is at a loss",
        author: "Ibn Qudamah",
        category: "Progress",
        source: "Minhaj al-Qasidin",
    },
    // Al-Dhahabi
    SeedQuote {
        text_arabic: "العلم نور والعمل نور ونور على نور",
        text_latin: "Al-'ilmu nurun wal-'amalu nurun wa nurun 'ala nur",
        translation: "Knowledge is light, action is light, and light upon light",
        author: "Al-Dhahabi",
        category: "Knowledge",
        source: "Siyar A'lam an-Nubala",
    },
    // Arabic Proverb
    SeedQuote {
        text_arabic: "من صبر ظفر",
        text_latin: "Man sabara zafar",
        translation: "Whoever is patient will triumph",
        author: "Arabic Proverb",
        category: "Patience",
        source: "Traditional Wisdom",
    },
    SeedQuote {
        text_arabic: "العقل زينة والجهل شين",
        text_latin: "Al-'aqlu zinatun wal-jahlu shayn",
        translation: "Intelligence is an ornament and ignorance is a disgrace",
        author: "Arabic Proverb",
        category: "Wisdom",
        source: "Traditional Wisdom",
    },
    SeedQuote {
        text_arabic: "من جد وجد ومن زرع حصد",
        text_latin: "Man jadda wajada wa man zara'a hasad",
        translation: "Whoever strives will find, and whoever sows will reap",
        author: "Arabic Proverb",
        category: "Effort",
        source: "Traditional Wisdom",
    },
    SeedQuote {
        text_arabic: "الصديق وقت الضيق",
        text_latin: "As-sadiqu waqtu ad-diq",
        translation: "A friend in need is a friend indeed",
        author: "Arabic Proverb",
        category: "Friendship",
        source: "Traditional Wisdom",
    },
    SeedQuote {
        text_arabic: "درهم وقاية خير من قنطار علاج",
        text_latin: "Dirhamu wiqayatin khayrun min qintari 'ilaj",
        translation: "An ounce of prevention is worth a pound of cure",
        author: "Arabic Proverb",
        category: "Prevention",
        source: "Traditional Wisdom",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entries_are_valid() {
        assert!(!SEED_CATALOG.is_empty());
        for entry in SEED_CATALOG {
            assert!(entry.to_request().validate().is_ok(), "{:?}", entry);
        }
    }

    #[test]
    fn test_to_request_maps_empty_to_none() {
        let seed = SeedQuote {
            text_arabic: "نص",
            text_latin: "",
            translation: "text",
            author: "Someone",
            category: "",
            source: "",
        };
        let req = seed.to_request();
        assert_eq!(req.text_latin, None);
        assert_eq!(req.translation.as_deref(), Some("text"));
        assert_eq!(req.category, None);
    }
}
