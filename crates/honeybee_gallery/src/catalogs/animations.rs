//! Interactive animation demos and their source snippets

use honeybee_core::{AnimationCategory, AnimationDemo};

pub static ANIMATIONS: &[AnimationDemo] = &[
    AnimationDemo {
        id: "apple-button",
        name: "Apple Button",
        description: "Smooth gradient reveal on hover, inspired by Apple.com",
        category: AnimationCategory::Hover,
        dependencies: &["framer-motion"],
        code: r#"<motion.button
  className="relative px-8 py-4 bg-white text-black font-semibold rounded-full overflow-hidden group"
  whileHover={{ scale: 1.02 }}
  whileTap={{ scale: 0.98 }}
  transition={{ type: "spring", stiffness: 400, damping: 25 }}
>
  <motion.div
    className="absolute inset-0 bg-gradient-to-r from-blue-400 via-purple-400 to-pink-400 opacity-0 group-hover:opacity-100 transition-opacity duration-500"
  />
  <span className="relative z-10">Button Text</span>
</motion.button>"#,
    },
    AnimationDemo {
        id: "linear-spotlight",
        name: "Linear Spotlight Card",
        description: "Mouse-following spotlight effect like Linear.app",
        category: AnimationCategory::Hover,
        dependencies: &["framer-motion"],
        code: r#"const handleMouseMove = (e) => {
  const rect = e.currentTarget.getBoundingClientRect();
  const x = e.clientX - rect.left;
  const y = e.clientY - rect.top;
  e.currentTarget.style.setProperty('--mouse-x', `${x}px`);
  e.currentTarget.style.setProperty('--mouse-y', `${y}px`);
};

<motion.div
  className="relative rounded-2xl bg-gradient-to-br from-[#1a1a2e] to-[#16213e] p-6 overflow-hidden group"
  onMouseMove={handleMouseMove}
  whileHover={{ y: -4 }}
>
  <div
    className="absolute inset-0 opacity-0 group-hover:opacity-100 transition-opacity duration-500"
    style={{
      background: 'radial-gradient(600px circle at var(--mouse-x) var(--mouse-y), rgba(99, 102, 241, 0.15), transparent 40%)',
    }}
  />
  <div className="relative z-10">Content</div>
</motion.div>"#,
    },
    AnimationDemo {
        id: "stripe-magnetic",
        name: "Stripe Magnetic Button",
        description: "Button that follows cursor with spring physics",
        category: AnimationCategory::Hover,
        dependencies: &["framer-motion"],
        code: r#"const [position, setPosition] = useState({ x: 0, y: 0 });

const handleMouseMove = (e) => {
  const rect = e.currentTarget.getBoundingClientRect();
  const x = e.clientX - rect.left - rect.width / 2;
  const y = e.clientY - rect.top - rect.height / 2;
  setPosition({ x: x * 0.3, y: y * 0.3 });
};

<motion.button
  onMouseMove={handleMouseMove}
  onMouseLeave={() => setPosition({ x: 0, y: 0 })}
  animate={{ x: position.x, y: position.y }}
  transition={{ type: "spring", stiffness: 150, damping: 15 }}
  whileHover={{ scale: 1.05 }}
>
  Magnetic
</motion.button>"#,
    },
    AnimationDemo {
        id: "vercel-border",
        name: "Vercel Border Gradient",
        description: "Animated gradient border effect",
        category: AnimationCategory::Continuous,
        dependencies: &["framer-motion"],
        code: r#"<motion.div
  className="relative p-[2px] rounded-xl bg-gradient-to-r from-gray-700 via-gray-500 to-gray-700"
  whileHover={{ scale: 1.02 }}
>
  <div className="bg-black rounded-xl p-6">
    Content here
  </div>
</motion.div>"#,
    },
    AnimationDemo {
        id: "airbnb-heart",
        name: "Airbnb Heart",
        description: "Heart icon with ripple effect on click",
        category: AnimationCategory::Click,
        dependencies: &["framer-motion"],
        code: r#"const [liked, setLiked] = useState(false);

<motion.button
  onClick={() => setLiked(!liked)}
  whileTap={{ scale: 0.9 }}
>
  <motion.svg
    fill={liked ? '#FF385C' : 'none'}
    stroke={liked ? '#FF385C' : 'currentColor'}
  >
    <motion.path
      animate={liked ? { scale: [1, 1.3, 1] } : {}}
      d="M12 21.35l-1.45-1.32C5.4 15.36..."
    />
  </motion.svg>
  <AnimatePresence>
    {liked && (
      <motion.div
        className="absolute inset-0 rounded-full border-2 border-[#FF385C]"
        initial={{ scale: 0.5, opacity: 1 }}
        animate={{ scale: 2, opacity: 0 }}
        exit={{ opacity: 0 }}
      />
    )}
  </AnimatePresence>
</motion.button>"#,
    },
    AnimationDemo {
        id: "skeleton-shimmer",
        name: "Skeleton Loading",
        description: "Shimmer effect for loading states",
        category: AnimationCategory::Continuous,
        dependencies: &["framer-motion"],
        code: r#"<div className="h-4 bg-gray-800 rounded relative overflow-hidden">
  <motion.div
    className="absolute inset-0 bg-gradient-to-r from-transparent via-gray-700 to-transparent"
    animate={{ x: ['-100%', '100%'] }}
    transition={{ repeat: Infinity, duration: 1.5, ease: "linear" }}
  />
</div>"#,
    },
    AnimationDemo {
        id: "switch-toggle",
        name: "Switch Toggle",
        description: "iOS-style animated switch",
        category: AnimationCategory::Click,
        dependencies: &["framer-motion"],
        code: r#"const [isOn, setIsOn] = useState(false);

<motion.button
  className={`w-14 h-8 rounded-full p-1 ${isOn ? 'bg-green-500' : 'bg-gray-600'}`}
  onClick={() => setIsOn(!isOn)}
>
  <motion.div
    className="w-6 h-6 bg-white rounded-full shadow-md"
    animate={{ x: isOn ? 24 : 0 }}
    transition={{ type: "spring", stiffness: 500, damping: 30 }}
  />
</motion.button>"#,
    },
    AnimationDemo {
        id: "notification-badge",
        name: "Notification Badge",
        description: "Badge with entrance/exit animation",
        category: AnimationCategory::MicroInteraction,
        dependencies: &["framer-motion"],
        code: r#"<motion.button className="relative">
  ðŸ””
  <AnimatePresence>
    {count > 0 && (
      <motion.span
        className="absolute -top-1 -right-1 bg-red-500 text-white text-xs w-5 h-5 rounded-full flex items-center justify-center"
        initial={{ scale: 0 }}
        animate={{ scale: 1 }}
        exit={{ scale: 0 }}
      >
        {count}
      </motion.span>
    )}
  </AnimatePresence>
</motion.button>"#,
    },
    AnimationDemo {
        id: "progress-bar",
        name: "Progress Bar",
        description: "Animated progress with spring physics",
        category: AnimationCategory::Continuous,
        dependencies: &["framer-motion"],
        code: r#"<div className="h-2 bg-gray-800 rounded-full overflow-hidden">
  <motion.div
    className="h-full bg-gradient-to-r from-blue-500 to-purple-500"
    animate={{ width: `${progress}%` }}
    transition={{ type: "spring", stiffness: 50 }}
  />
</div>"#,
    },
    AnimationDemo {
        id: "morphing-shape",
        name: "Morphing Shape",
        description: "Organic shape transformation",
        category: AnimationCategory::Continuous,
        dependencies: &["framer-motion"],
        code: r#"<motion.div
  className="w-32 h-32 bg-gradient-to-br from-purple-500 to-pink-500"
  animate={{
    borderRadius: ['20%', '50%', '20%'],
    rotate: [0, 180, 360],
    scale: [1, 1.1, 1],
  }}
  transition={{
    duration: 4,
    repeat: Infinity,
    ease: "easeInOut",
  }}
/>"#,
    },
    AnimationDemo {
        id: "floating-label",
        name: "Floating Label Input",
        description: "Material Design style floating label",
        category: AnimationCategory::MicroInteraction,
        dependencies: &["framer-motion"],
        code: r#"const [isFocused, setIsFocused] = useState(false);
const [value, setValue] = useState('');

<div className="relative">
  <motion.label
    className="absolute left-3 pointer-events-none"
    animate={{
      y: isFocused || value ? -24 : 12,
      scale: isFocused || value ? 0.85 : 1,
      color: isFocused ? '#6366F1' : '#9CA3AF',
    }}
    transition={{ type: "spring", stiffness: 300, damping: 20 }}
  >
    Label
  </motion.label>
  <input
    value={value}
    onChange={(e) => setValue(e.target.value)}
    onFocus={() => setIsFocused(true)}
    onBlur={() => setIsFocused(false)}
    className="w-full px-3 py-3 bg-gray-800 border-2 border-gray-700 rounded-lg focus:border-indigo-500 focus:outline-none"
  />
</div>"#,
    },
    AnimationDemo {
        id: "card-stack",
        name: "Card Stack",
        description: "Interactive stacked cards with hover effect",
        category: AnimationCategory::Hover,
        dependencies: &["framer-motion"],
        code: r#"const cards = [
  { color: 'bg-red-500', text: 'Card 1' },
  { color: 'bg-blue-500', text: 'Card 2' },
  { color: 'bg-green-500', text: 'Card 3' },
];

<div className="relative w-48 h-32">
  {cards.map((card, i) => (
    <motion.div
      key={i}
      className={`absolute w-full h-full ${card.color} rounded-xl`}
      style={{ zIndex: cards.length - i }}
      initial={{ y: i * 10, x: i * 10 }}
      whileHover={{ y: i * 10 - 20, rotate: (i - 1) * 5 }}
      transition={{ type: "spring", stiffness: 300, damping: 20 }}
    >
      {card.text}
    </motion.div>
  ))}
</div>"#,
    },
];
